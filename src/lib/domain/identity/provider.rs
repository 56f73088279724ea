//! Identity provider module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::identity::{
    errors::{LookupUserError, VerifyTokenError},
    models::{AuthenticatedUser, IdentityUser},
};

/// Identity provider
#[async_trait]
pub trait IdentityProvider: Clone + Send + Sync + 'static {
    /// Exchange a bearer token for the caller it belongs to.
    ///
    /// # Arguments
    /// * `token` - The raw bearer token presented by the caller.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the [`AuthenticatedUser`] the
    /// token resolves to, or an [`Err`] containing a [`VerifyTokenError`].
    async fn verify_token(&self, token: &str) -> Result<AuthenticatedUser, VerifyTokenError>;

    /// Look up a user record, including their email address, by identifier.
    ///
    /// Uses the identity service's administrative surface, so it can resolve
    /// any user, not just the caller.
    async fn get_user_by_id(&self, user_id: &str) -> Result<IdentityUser, LookupUserError>;
}

#[cfg(test)]
mock! {
    pub IdentityProvider {}

    impl Clone for IdentityProvider {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl IdentityProvider for IdentityProvider {
        async fn verify_token(&self, token: &str) -> Result<AuthenticatedUser, VerifyTokenError>;
        async fn get_user_by_id(&self, user_id: &str) -> Result<IdentityUser, LookupUserError>;
    }
}
