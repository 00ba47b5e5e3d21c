//! Wire types of the session relay endpoints.
//!
//! Shared by the relay server (`pazarin-api`) and its HTTP client in the
//! dashboard so both sides agree on the JSON shapes.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

pub const GET_JWT_COOKIE_PATH: &str = "/api/get-jwt-cookie";
pub const SET_JWT_COOKIE_PATH: &str = "/api/set-jwt-cookie";
pub const LOGOUT_PATH: &str = "/api/logout";

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logout successful";
pub const READ_SESSION_FAILED_MESSAGE: &str = "Failed to read session, please try again";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed, please try again!";
pub const LOGOUT_FAILED_MESSAGE: &str = "Logout failed, please try again!";

/// `GET /api/get-jwt-cookie` response. `jwt` is `""` when no session exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtCookieResponse {
    pub success: bool,
    #[serde(default)]
    pub jwt: String,
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
}

/// `POST /api/set-jwt-cookie` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetJwtRequest {
    pub jwt: String,
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
}

/// Success acknowledgement for set-jwt-cookie and logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Failure envelope returned by every relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayFailure {
    pub success: bool,
    pub error: ErrorMessage,
}

/// `{ "message": ... }` body shared with the CMS error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl RelayFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_response_omits_user_id() {
        let json = serde_json::to_value(JwtCookieResponse {
            success: true,
            jwt: String::new(),
            user_id: None,
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({ "success": true, "jwt": "" }));
    }

    #[test]
    fn set_jwt_request_accepts_camel_case_user_id() {
        let req: SetJwtRequest =
            serde_json::from_str(r#"{"jwt":"abc","userId":4}"#).unwrap();
        assert_eq!(req.jwt, "abc");
        assert_eq!(req.user_id, Some(4));
    }

    #[test]
    fn failure_envelope_shape() {
        let json = serde_json::to_value(RelayFailure::new("boom")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": { "message": "boom" } })
        );
    }
}
