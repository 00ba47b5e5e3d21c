//! Route gate for the dashboard pages.
//!
//! Only `/` and `/login` are gated, and only on whether the session cookie
//! is present. The token inside is not inspected here.

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    Redirect(&'static str),
}

/// Decide what to do with a page request.
pub fn decide(path: &str, has_session_cookie: bool) -> GateDecision {
    match path {
        LOGIN_PATH if has_session_cookie => GateDecision::Redirect(HOME_PATH),
        HOME_PATH if !has_session_cookie => GateDecision::Redirect(LOGIN_PATH),
        _ => GateDecision::Continue,
    }
}
