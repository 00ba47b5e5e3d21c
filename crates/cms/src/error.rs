use pazarin_core::relay::ErrorMessage;
use serde::Deserialize;

/// Errors from the CMS REST layer.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CMS answered with a non-2xx status.
    #[error("CMS API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The CMS `error.message`, or the raw body when there was none.
        message: String,
    },

    /// The request metadata could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorMessage,
}

impl CmsError {
    /// Build an [`CmsError::Api`] from a failed response body of the form
    /// `{ "data": null, "error": { "status", "name", "message" } }`.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    format!("Request failed with status {status}")
                } else {
                    body.to_string()
                }
            });
        CmsError::Api { status, message }
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            CmsError::Api { message, .. } => message.clone(),
            CmsError::Request(err) => err.to_string(),
            CmsError::Encode(err) => err.to_string(),
        }
    }
}
