use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pazarin_core::relay::RelayFailure;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders the relay failure envelope
/// `{ "success": false, "error": { "message": ... } }`. Client mistakes map
/// to 400, everything that went wrong on our side to 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A relay operation failed; the message is shown to the user as is.
    #[error("Relay failure: {0}")]
    Relay(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Relay(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, axum::Json(RelayFailure::new(message))).into_response()
    }
}
