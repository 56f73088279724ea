//! Identity models

use uuid::Uuid;

use crate::domain::communication::EmailAddress;

/// The caller resolved from a bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The caller's UUID in the identity service
    pub id: Uuid,
}

/// A user record from the identity service's administrative lookup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityUser {
    /// The user's identifier, as the identity service reports it
    pub id: String,

    /// The user's contact address, when one is on record
    pub email: Option<EmailAddress>,
}
