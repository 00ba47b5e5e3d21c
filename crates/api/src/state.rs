use std::sync::Arc;

use pazarin_core::error::CoreError;
use pazarin_core::session::SessionSealer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Seals and opens the session cookie.
    pub sealer: Arc<SessionSealer>,
}

impl AppState {
    /// Build the state, deriving the cookie key from the configured password.
    ///
    /// Fails when the password is too short or the TTL is not positive.
    pub fn new(config: ServerConfig) -> Result<Self, CoreError> {
        let sealer = SessionSealer::new(&config.session.cookie_password, config.session.ttl_secs)?;
        Ok(Self {
            config: Arc::new(config),
            sealer: Arc::new(sealer),
        })
    }
}
