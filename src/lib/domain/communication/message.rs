//! Email message

use crate::domain::communication::EmailAddress;

/// Email message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The sender mailbox, `Name <address>` form. Falls back to the mailer's
    /// configured sender when absent.
    pub from: Option<String>,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,
}
