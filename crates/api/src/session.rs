//! Session cookie plumbing: reading the cookie off a request, building the
//! `Set-Cookie` headers, and the [`SessionCookie`] extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{HeaderMap, HeaderValue, COOKIE};
use axum::http::request::Parts;
use pazarin_core::session::SessionData;

use crate::config::SessionConfig;
use crate::error::AppError;
use crate::state::AppState;

/// Value of the named cookie from the `Cookie` request headers, if present.
///
/// An empty value counts as absent.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` header carrying a freshly sealed session.
pub fn session_cookie_header(
    config: &SessionConfig,
    sealed: &str,
    max_age_secs: i64,
) -> Result<HeaderValue, AppError> {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name, sealed, max_age_secs
    );
    if config.secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::InternalError(format!("Invalid session cookie header: {e}")))
}

/// `Set-Cookie` header that deletes the session cookie.
pub fn clear_cookie_header(config: &SessionConfig) -> Result<HeaderValue, AppError> {
    session_cookie_header(config, "", 0)
}

/// The session carried by the request's cookie.
///
/// Never rejects: a missing cookie, or one that fails to open (tampered,
/// sealed with another password, expired), yields an empty session.
#[derive(Debug, Clone, Default)]
pub struct SessionCookie {
    /// Whether the cookie was sent at all.
    pub present: bool,
    pub data: SessionData,
}

impl FromRequestParts<AppState> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(sealed) = read_cookie(&parts.headers, &state.config.session.cookie_name) else {
            return Ok(Self::default());
        };

        let data = match state.sealer.unseal(sealed) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable session cookie");
                SessionData::default()
            }
        };

        Ok(Self {
            present: true,
            data,
        })
    }
}
