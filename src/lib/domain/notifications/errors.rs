//! Error types for notification validation and dispatch

use thiserror::Error;

use crate::domain::communication::MailerError;

/// Errors that can occur when validating a notification draft
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateNotificationError {
    /// One or more required fields are absent or empty. The message always
    /// names the full required set; the variant carries the fields that were
    /// actually missing.
    #[error("Missing required fields: userId, subject, message")]
    MissingFields(Vec<&'static str>),
}

/// Errors that can occur when dispatching a notification
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The bearer token did not resolve to a caller
    #[error("Unauthorized")]
    Unauthorized,

    /// The caller is authenticated but holds no admin role
    #[error("Unauthorized - Admin access required")]
    AdminRequired,

    /// The request payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidateNotificationError),

    /// The mail sink rejected or failed the send
    #[error(transparent)]
    Mailer(#[from] MailerError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
