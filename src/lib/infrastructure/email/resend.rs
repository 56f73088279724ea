//! Resend email service implementation

use async_trait::async_trait;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::communication::{Mailer, MailerError, Message};

/// Resend configuration
#[derive(Clone, Debug, Parser)]
pub struct ResendConfig {
    /// The Resend API key
    #[clap(long, env = "RESEND_API_KEY")]
    pub api_key: String,

    /// The Resend API base URL
    #[clap(long, env = "RESEND_BASE_URL", default_value = "https://api.resend.com")]
    pub base_url: String,

    /// The sender mailbox, `Name <address>` form
    #[clap(
        long,
        env = "EMAIL_SENDER",
        default_value = "QuizMaster <onboarding@resend.dev>"
    )]
    pub sender: String,
}

/// Resend mailer
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    config: ResendConfig,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [String; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl ResendMailer {
    /// Create a new Resend mailer
    pub fn new(config: ResendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    #[mutants::skip]
    async fn send(&self, message: &Message) -> Result<String, MailerError> {
        let from = message.from.as_deref().unwrap_or(&self.config.sender);

        let request = SendEmailRequest {
            from,
            to: [message.to.to_string()],
            subject: &message.subject,
            html: &message.html_body,
        };

        let response = self
            .client
            .post(format!("{}/emails", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| MailerError::UnknownError(err.into()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            return Err(MailerError::Rejected(format!(
                "Email provider returned {status}: {body}"
            )));
        }

        let payload: SendEmailResponse = response
            .json()
            .await
            .map_err(|err| MailerError::UnknownError(err.into()))?;

        Ok(payload.id)
    }
}
