//! HTTP identity provider implementation

use anyhow::anyhow;
use async_trait::async_trait;
use clap::Parser;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::{
    communication::EmailAddress,
    identity::{
        AuthenticatedUser, IdentityProvider, IdentityUser, LookupUserError, VerifyTokenError,
    },
};

/// Identity service configuration
#[derive(Clone, Debug, Parser)]
pub struct IdentityConfig {
    /// Base URL of the identity service
    #[clap(long, env = "IDENTITY_BASE_URL")]
    pub base_url: String,

    /// Service-level credential for administrative lookups
    #[clap(long, env = "IDENTITY_SERVICE_KEY")]
    pub service_key: String,
}

/// Identity provider backed by the hosted identity service's HTTP API
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    config: IdentityConfig,
}

/// User payload returned by both the self and administrative lookups
#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    email: Option<String>,
}

impl HttpIdentityProvider {
    /// Create a new identity provider client
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    #[mutants::skip]
    async fn verify_token(&self, token: &str) -> Result<AuthenticatedUser, VerifyTokenError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.config.base_url))
            .bearer_auth(token)
            .header("apikey", &self.config.service_key)
            .send()
            .await
            .map_err(|err| VerifyTokenError::UnknownError(err.into()))?;

        if !response.status().is_success() {
            return Err(VerifyTokenError::InvalidToken);
        }

        let payload: UserPayload = response
            .json()
            .await
            .map_err(|err| VerifyTokenError::UnknownError(err.into()))?;

        let id = payload
            .id
            .parse()
            .map_err(|_| VerifyTokenError::InvalidToken)?;

        Ok(AuthenticatedUser { id })
    }

    #[mutants::skip]
    async fn get_user_by_id(&self, user_id: &str) -> Result<IdentityUser, LookupUserError> {
        let response = self
            .client
            .get(format!(
                "{}/auth/v1/admin/users/{user_id}",
                self.config.base_url
            ))
            .bearer_auth(&self.config.service_key)
            .header("apikey", &self.config.service_key)
            .send()
            .await
            .map_err(|err| LookupUserError::UnknownError(err.into()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupUserError::UserNotFound);
        }

        if !response.status().is_success() {
            return Err(LookupUserError::UnknownError(anyhow!(
                "identity service returned {}",
                response.status()
            )));
        }

        let payload: UserPayload = response
            .json()
            .await
            .map_err(|err| LookupUserError::UnknownError(err.into()))?;

        // An address the identity service holds but that does not parse is as
        // good as no address at all.
        let email = payload
            .email
            .as_deref()
            .and_then(|raw| EmailAddress::new(raw).ok());

        Ok(IdentityUser {
            id: payload.id,
            email,
        })
    }
}
