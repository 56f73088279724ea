//! Notification service module

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::{Mailer, Message},
    identity::IdentityProvider,
    notifications::{
        errors::DispatchError,
        outcome::DispatchOutcome,
        request::NotificationDraft,
        template::{NotificationEmailTemplate, FALLBACK_RECIPIENT_NAME},
    },
    roles::{RoleRepository, ADMIN_ROLE},
};

/// Reported to the caller when the target user has no resolvable address
const NO_EMAIL_FOUND: &str = "No email found for user";

/// Notification service
#[async_trait]
pub trait NotificationService: Clone + Send + Sync + 'static {
    /// Dispatch a notification email to the user named in `draft`.
    ///
    /// Runs the full gate sequence: the bearer token is exchanged for a
    /// caller, the caller's admin role is checked, the draft is validated,
    /// and the target's email address is resolved, before a single send is
    /// attempted. Failure at any gate short-circuits the rest.
    ///
    /// # Arguments
    /// * `token` - The caller's raw bearer token.
    /// * `draft` - The unvalidated notification fields.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing a [`DispatchOutcome`] when the
    /// gates passed (including the no-recipient outcome), or an [`Err`]
    /// containing a [`DispatchError`] describing the gate that refused.
    async fn dispatch(
        &self,
        token: &str,
        draft: NotificationDraft,
    ) -> Result<DispatchOutcome, DispatchError>;
}

#[cfg(test)]
mock! {
    pub NotificationService {}

    impl Clone for NotificationService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl NotificationService for NotificationService {
        async fn dispatch(
            &self,
            token: &str,
            draft: NotificationDraft,
        ) -> Result<DispatchOutcome, DispatchError>;
    }
}

/// Notification service implementation
#[derive(Debug, Clone)]
pub struct NotificationServiceImpl<I, R, M>
where
    I: IdentityProvider,
    R: RoleRepository,
    M: Mailer,
{
    identity: Arc<I>,
    roles: Arc<R>,
    mailer: Arc<M>,
}

impl<I, R, M> NotificationServiceImpl<I, R, M>
where
    I: IdentityProvider,
    R: RoleRepository,
    M: Mailer,
{
    /// Create a new notification service
    pub fn new(identity: Arc<I>, roles: Arc<R>, mailer: Arc<M>) -> Self {
        Self {
            identity,
            roles,
            mailer,
        }
    }
}

#[async_trait]
impl<I, R, M> NotificationService for NotificationServiceImpl<I, R, M>
where
    I: IdentityProvider,
    R: RoleRepository,
    M: Mailer,
{
    async fn dispatch(
        &self,
        token: &str,
        draft: NotificationDraft,
    ) -> Result<DispatchOutcome, DispatchError> {
        let caller = self.identity.verify_token(token).await.map_err(|err| {
            debug!("token verification failed: {err}");
            DispatchError::Unauthorized
        })?;

        let is_admin = match self.roles.has_role(&caller.id, ADMIN_ROLE).await {
            Ok(found) => found,
            Err(err) => {
                warn!(caller = %caller.id, "role lookup failed: {err}");
                false
            }
        };

        if !is_admin {
            return Err(DispatchError::AdminRequired);
        }

        let request = draft.validate()?;

        let recipient = match self.identity.get_user_by_id(request.user_id()).await {
            Ok(user) => user.email,
            Err(err) => {
                debug!(user_id = request.user_id(), "user lookup failed: {err}");
                None
            }
        };

        let Some(recipient) = recipient else {
            info!("No email found for user {}", request.user_id());

            return Ok(DispatchOutcome::NoRecipient {
                reason: NO_EMAIL_FOUND.to_string(),
            });
        };

        let name = request.recipient_name().unwrap_or(FALLBACK_RECIPIENT_NAME);
        let html = NotificationEmailTemplate::new(name, request.message()).render_html()?;

        let message = Message {
            to: recipient.clone(),
            from: None,
            subject: request.subject().to_string(),
            html_body: html,
        };

        let email_id = self.mailer.send(&message).await?;

        info!("Email sent to {recipient}, provider id {email_id}");

        Ok(DispatchOutcome::Dispatched { email_id })
    }
}
