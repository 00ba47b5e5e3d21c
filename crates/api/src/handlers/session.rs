//! Handlers for the session relay (`/api/get-jwt-cookie`,
//! `/api/set-jwt-cookie`, `/api/logout`).
//!
//! The browser never sees the CMS token directly; it lives sealed inside an
//! HTTP-only cookie and is handed back through these endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use pazarin_core::relay::{
    JwtCookieResponse, RelayAck, SetJwtRequest, LOGIN_FAILED_MESSAGE, LOGIN_SUCCESS_MESSAGE,
    LOGOUT_SUCCESS_MESSAGE,
};
use pazarin_core::session::SessionData;

use crate::error::{AppError, AppResult};
use crate::session::{clear_cookie_header, session_cookie_header, SessionCookie};
use crate::state::AppState;

/// GET /api/get-jwt-cookie
///
/// Returns the stored token, or `""` when there is no readable session.
pub async fn get_jwt_cookie(session: SessionCookie) -> Json<JwtCookieResponse> {
    let SessionCookie { data, .. } = session;
    Json(JwtCookieResponse {
        success: true,
        jwt: data.jwt.unwrap_or_default(),
        user_id: data.user_id,
    })
}

/// POST /api/set-jwt-cookie
///
/// Seals `{ jwt, userId }` into the session cookie. An empty token or a body
/// that is not the expected JSON is a 400.
pub async fn set_jwt_cookie(
    State(state): State<AppState>,
    payload: Result<Json<SetJwtRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected set-jwt-cookie body");
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    if input.jwt.trim().is_empty() {
        return Err(AppError::BadRequest("jwt must not be empty".into()));
    }

    let data = SessionData::new(input.jwt, input.user_id);
    let sealed = state.sealer.seal(&data).map_err(|e| {
        tracing::error!(error = %e, "Failed to seal session");
        AppError::Relay(LOGIN_FAILED_MESSAGE.into())
    })?;
    let cookie = session_cookie_header(&state.config.session, &sealed, state.sealer.ttl_secs())?;

    tracing::info!(user_id = ?data.user_id, "Session stored");

    Ok((
        [(SET_COOKIE, cookie)],
        Json(RelayAck {
            success: true,
            message: LOGIN_SUCCESS_MESSAGE.into(),
        }),
    ))
}

/// GET|POST /api/logout
///
/// Expires the session cookie. Succeeds whether or not a session existed.
pub async fn logout(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cookie = clear_cookie_header(&state.config.session)?;

    tracing::info!("Session cleared");

    Ok((
        [(SET_COOKIE, cookie)],
        Json(RelayAck {
            success: true,
            message: LOGOUT_SUCCESS_MESSAGE.into(),
        }),
    ))
}
