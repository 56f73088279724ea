//! Notification request validation

use crate::domain::notifications::errors::ValidateNotificationError;

/// An unvalidated notification, as decoded from the wire.
///
/// Validation runs after the caller has been authenticated and authorized,
/// so the draft carries raw optional fields until then.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationDraft {
    /// The target user's identifier in the identity service
    pub user_id: Option<String>,

    /// The literal email subject
    pub subject: Option<String>,

    /// The body text, which may contain the `{name}` placeholder
    pub message: Option<String>,

    /// Display name substituted into the placeholder
    pub user_name: Option<String>,
}

impl NotificationDraft {
    /// Validate the draft into a [`NotificationRequest`].
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the validated request, or an
    /// [`Err`] carrying the enumerated missing field names.
    pub fn validate(self) -> Result<NotificationRequest, ValidateNotificationError> {
        let mut missing = Vec::new();

        let user_id = required(self.user_id, "userId", &mut missing);
        let subject = required(self.subject, "subject", &mut missing);
        let message = required(self.message, "message", &mut missing);

        match (user_id, subject, message) {
            (Some(user_id), Some(subject), Some(message)) => Ok(NotificationRequest {
                user_id,
                subject,
                message,
                recipient_name: self.user_name.filter(|name| !name.is_empty()),
            }),
            _ => Err(ValidateNotificationError::MissingFields(missing)),
        }
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// A validated notification request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Target user's identifier
    user_id: String,

    /// Literal email subject
    subject: String,

    /// Body text, `{name}` placeholders not yet substituted
    message: String,

    /// Display name for the recipient
    recipient_name: Option<String>,
}

impl NotificationRequest {
    /// Get the target user's identifier
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Get the email subject
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Get the raw message body
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the recipient's display name, if one was supplied
    pub fn recipient_name(&self) -> Option<&str> {
        self.recipient_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn draft() -> NotificationDraft {
        NotificationDraft {
            user_id: Some("11111111-2222-3333-4444-555555555555".to_string()),
            subject: Some("Hi".to_string()),
            message: Some("Hello {name}".to_string()),
            user_name: Some("Asha".to_string()),
        }
    }

    #[test]
    fn test_complete_draft_validates() -> TestResult {
        let request = draft().validate()?;

        assert_eq!(request.user_id(), "11111111-2222-3333-4444-555555555555");
        assert_eq!(request.subject(), "Hi");
        assert_eq!(request.message(), "Hello {name}");
        assert_eq!(request.recipient_name(), Some("Asha"));

        Ok(())
    }

    #[test]
    fn test_missing_user_name_is_allowed() -> TestResult {
        let request = NotificationDraft {
            user_name: None,
            ..draft()
        }
        .validate()?;

        assert_eq!(request.recipient_name(), None);

        Ok(())
    }

    #[test]
    fn test_empty_user_name_is_treated_as_absent() -> TestResult {
        let request = NotificationDraft {
            user_name: Some(String::new()),
            ..draft()
        }
        .validate()?;

        assert_eq!(request.recipient_name(), None);

        Ok(())
    }

    #[test]
    fn test_missing_subject_is_enumerated() {
        let result = NotificationDraft {
            subject: None,
            ..draft()
        }
        .validate();

        assert_eq!(
            result.unwrap_err(),
            ValidateNotificationError::MissingFields(vec!["subject"])
        );
    }

    #[test]
    fn test_empty_field_counts_as_missing() {
        let result = NotificationDraft {
            message: Some(String::new()),
            ..draft()
        }
        .validate();

        assert_eq!(
            result.unwrap_err(),
            ValidateNotificationError::MissingFields(vec!["message"])
        );
    }

    #[test]
    fn test_empty_draft_enumerates_all_required_fields() {
        let result = NotificationDraft::default().validate();

        assert_eq!(
            result.unwrap_err(),
            ValidateNotificationError::MissingFields(vec!["userId", "subject", "message"])
        );
    }

    #[test]
    fn test_error_message_names_the_required_trio() {
        let error = NotificationDraft::default().validate().unwrap_err();

        assert_eq!(
            error.to_string(),
            "Missing required fields: userId, subject, message"
        );
    }
}
