pub mod health;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /get-jwt-cookie                 read session (GET)
/// /set-jwt-cookie                 store session (POST)
/// /logout                         clear session (GET, POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(session::router())
}
