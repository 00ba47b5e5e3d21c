//! Integration tests for the session relay endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_json, build_app_with, build_test_app, get, get_with_cookie, post_json, post_raw, send,
    set_cookie, set_cookie_pair, test_config, COOKIE_NAME,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: set then get returns the same token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_then_get_returns_stored_token() {
    let response = post_json(
        build_test_app(),
        "/api/set-jwt-cookie",
        json!({ "jwt": "tok-123", "userId": 7 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie_pair(&response);
    assert!(cookie.starts_with(&format!("{COOKIE_NAME}=")));

    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true, "message": "Login successful" }));

    let response = get_with_cookie(build_test_app(), "/api/get-jwt-cookie", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["jwt"], "tok-123");
    assert_eq!(json["userId"], 7);
}

#[tokio::test]
async fn cookie_is_sealed_and_http_only() {
    let response = post_json(
        build_test_app(),
        "/api/set-jwt-cookie",
        json!({ "jwt": "plain-token-value" }),
    )
    .await;

    let header = set_cookie(&response);
    assert!(!header.contains("plain-token-value"));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
    assert!(header.contains("Path=/"));
    assert!(header.contains("Max-Age=1209600"));
    assert!(!header.contains("Secure"));
}

#[tokio::test]
async fn secure_flag_follows_config() {
    let mut config = test_config();
    config.session.secure = true;

    let response = post_json(
        build_app_with(config),
        "/api/set-jwt-cookie",
        json!({ "jwt": "t" }),
    )
    .await;

    assert!(set_cookie(&response).contains("; Secure"));
}

// ---------------------------------------------------------------------------
// Test: reading without a session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_without_cookie_returns_empty_token() {
    let response = get(build_test_app(), "/api/get-jwt-cookie").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true, "jwt": "" }));
}

#[tokio::test]
async fn tampered_cookie_reads_as_empty_session() {
    let response = get_with_cookie(
        build_test_app(),
        "/api/get-jwt-cookie",
        &format!("{COOKIE_NAME}=not-a-sealed-value"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["jwt"], "");
}

#[tokio::test]
async fn cookie_sealed_with_other_password_is_ignored() {
    let mut other = test_config();
    other.session.cookie_password = "another_password_that_is_also_32_chars_long".into();

    let response = post_json(
        build_app_with(other),
        "/api/set-jwt-cookie",
        json!({ "jwt": "foreign" }),
    )
    .await;
    let cookie = set_cookie_pair(&response);

    let response = get_with_cookie(build_test_app(), "/api/get-jwt-cookie", &cookie).await;
    let json = body_json(response).await;
    assert_eq!(json["jwt"], "");
}

// ---------------------------------------------------------------------------
// Test: bad input is a 400 with the failure envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_jwt_is_rejected() {
    let response = post_json(build_test_app(), "/api/set-jwt-cookie", json!({ "jwt": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get("set-cookie").is_none());

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"]["message"].is_string());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let response = post_raw(build_test_app(), "/api/set-jwt-cookie", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn missing_jwt_field_is_rejected() {
    let response =
        post_json(build_test_app(), "/api/set-jwt-cookie", json!({ "userId": 3 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn logout_expires_cookie() {
    for method in [Method::GET, Method::POST] {
        let response = send(
            build_test_app(),
            method.clone(),
            "/api/logout",
            Some(&format!("{COOKIE_NAME}=whatever")),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "{method}");

        let header = set_cookie(&response);
        assert!(header.starts_with(&format!("{COOKIE_NAME}=;")));
        assert!(header.contains("Max-Age=0"));

        let json = body_json(response).await;
        assert_eq!(json, json!({ "success": true, "message": "Logout successful" }));
    }
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let response = get(build_test_app(), "/api/logout").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_after_logout_returns_empty_token() {
    let response = get(build_test_app(), "/api/logout").await;
    let cleared = set_cookie_pair(&response);
    assert_eq!(cleared, format!("{COOKIE_NAME}="));

    let response = get_with_cookie(build_test_app(), "/api/get-jwt-cookie", &cleared).await;
    let json = body_json(response).await;
    assert_eq!(json["jwt"], "");
}
