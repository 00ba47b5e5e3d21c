use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Session relay routes, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get-jwt-cookie", get(session::get_jwt_cookie))
        .route("/set-jwt-cookie", post(session::set_jwt_cookie))
        .route("/logout", get(session::logout).post(session::logout))
}
