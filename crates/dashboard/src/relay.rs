//! Client side of the session relay.
//!
//! [`SessionRelay`] is the seam the controllers talk to; [`HttpSessionRelay`]
//! is the real implementation, a cookie-keeping HTTP client pointed at the
//! relay server.

use std::time::Duration;

use async_trait::async_trait;
use pazarin_core::relay::{
    JwtCookieResponse, RelayAck, RelayFailure, SetJwtRequest, GET_JWT_COOKIE_PATH, LOGOUT_PATH,
    SET_JWT_COOKIE_PATH,
};
use pazarin_core::types::DbId;
use serde_json::from_str;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The HTTP request itself failed.
    #[error("Relay request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The relay answered with its failure envelope.
    #[error("Relay error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl RelayError {
    pub fn user_message(&self) -> String {
        match self {
            RelayError::Request(err) => err.to_string(),
            RelayError::Api { message, .. } => message.clone(),
        }
    }
}

/// Read, store and clear the session cookie.
#[async_trait]
pub trait SessionRelay: Send + Sync {
    /// The stored token; `jwt` is empty when there is no session.
    async fn get_jwt(&self) -> Result<JwtCookieResponse, RelayError>;

    async fn set_jwt(&self, jwt: &str, user_id: Option<DbId>) -> Result<RelayAck, RelayError>;

    async fn logout(&self) -> Result<RelayAck, RelayError>;
}

/// [`SessionRelay`] over HTTP. The client keeps cookies between calls, as a
/// browser would.
#[derive(Debug, Clone)]
pub struct HttpSessionRelay {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSessionRelay {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RelayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = from_str::<RelayFailure>(&body)
            .map(|failure| failure.error.message)
            .unwrap_or_else(|_| format!("Relay request failed with status {}", status.as_u16()));

        tracing::warn!(status = status.as_u16(), %message, "Relay request rejected");
        Err(RelayError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl SessionRelay for HttpSessionRelay {
    async fn get_jwt(&self) -> Result<JwtCookieResponse, RelayError> {
        let response = self.client.get(self.url(GET_JWT_COOKIE_PATH)).send().await?;
        Self::parse_response(response).await
    }

    async fn set_jwt(&self, jwt: &str, user_id: Option<DbId>) -> Result<RelayAck, RelayError> {
        let response = self
            .client
            .post(self.url(SET_JWT_COOKIE_PATH))
            .json(&SetJwtRequest {
                jwt: jwt.to_string(),
                user_id,
            })
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn logout(&self) -> Result<RelayAck, RelayError> {
        let response = self.client.post(self.url(LOGOUT_PATH)).send().await?;
        Self::parse_response(response).await
    }
}
