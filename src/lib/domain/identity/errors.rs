//! Identity errors

use thiserror::Error;

/// Errors that can occur when verifying a bearer token
#[derive(Debug, Error)]
pub enum VerifyTokenError {
    /// The token is invalid, expired, or resolves to no user
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when looking up a user by identifier
#[derive(Debug, Error)]
pub enum LookupUserError {
    /// No user exists with that identifier
    #[error("User not found")]
    UserNotFound,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
