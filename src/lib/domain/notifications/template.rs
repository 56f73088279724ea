//! Notification email template

use anyhow::Result;
use askama::Template;
use chrono::{Datelike, Utc};

/// Display name used when the request supplies none
pub const FALLBACK_RECIPIENT_NAME: &str = "Student";

/// The placeholder token recognized in message bodies
const NAME_TOKEN: &str = "{name}";

/// Replace every occurrence of the `{name}` token with the given name.
pub fn render_placeholders(template: &str, name: &str) -> String {
    template.replace(NAME_TOKEN, name)
}

/// Notification email template
#[derive(Debug, Template)]
#[template(path = "emails/notification.html")]
pub struct NotificationEmailTemplate {
    /// Recipient display name shown in the greeting
    pub name: String,

    /// The personalized message body
    pub message: String,

    /// Current year, shown in the footer
    pub year: i32,
}

impl NotificationEmailTemplate {
    /// Creates a new `NotificationEmailTemplate`, substituting the display
    /// name into the message body.
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: render_placeholders(message, name),
            year: Utc::now().year(),
        }
    }

    /// Renders the email with CSS rules inlined for mail clients
    pub fn render_html(&self) -> Result<String> {
        Ok(css_inline::inline(&self.render()?)?)
    }
}
