use pazarin_cms::CmsError;
use pazarin_core::error::CoreError;

use crate::relay::RelayError;

/// Errors surfaced by the dashboard controllers.
///
/// Every failure also lands in the snackbar, worded by
/// [`DashboardError::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Cms(#[from] CmsError),

    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Rejected before anything was sent.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DashboardError {
    /// Text for the snackbar.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Cms(err) => err.user_message(),
            DashboardError::Relay(err) => err.user_message(),
            DashboardError::Core(CoreError::Validation(msg)) => msg.clone(),
            DashboardError::Core(err) => err.to_string(),
            DashboardError::Validation(msg) => msg.clone(),
        }
    }
}
