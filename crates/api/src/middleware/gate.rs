//! Cookie-presence gate in front of the dashboard pages.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use pazarin_core::gate::{decide, GateDecision};

use crate::session::read_cookie;
use crate::state::AppState;

/// Redirect `/` to `/login` without a session cookie, and `/login` to `/`
/// with one. Every other path passes through untouched.
///
/// Mounted with `axum::middleware::from_fn_with_state`.
pub async fn route_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let has_cookie =
        read_cookie(request.headers(), &state.config.session.cookie_name).is_some();

    match decide(request.uri().path(), has_cookie) {
        GateDecision::Continue => next.run(request).await,
        GateDecision::Redirect(to) => {
            tracing::debug!(from = %request.uri().path(), to, "Route gate redirect");
            Redirect::temporary(to).into_response()
        }
    }
}
