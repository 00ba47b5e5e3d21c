#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pazarin_api::config::{ServerConfig, SessionConfig};
use pazarin_api::router::build_app_router;
use pazarin_api::state::AppState;

pub const COOKIE_NAME: &str = "pazarin_session";
pub const COOKIE_PASSWORD: &str = "complex_password_at_least_32_characters_long";

/// Build a test `ServerConfig` with safe defaults and no static directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir: None,
        session: SessionConfig {
            cookie_name: COOKIE_NAME.to_string(),
            cookie_password: COOKIE_PASSWORD.to_string(),
            secure: false,
            ttl_secs: 1_209_600,
        },
    }
}

/// Build the full application router from the given configuration.
pub fn build_app_with(config: ServerConfig) -> Router {
    let state = AppState::new(config).expect("test config must be valid");
    build_app_router(state)
}

/// Build the full application router with all middleware layers.
pub fn build_test_app() -> Router {
    build_app_with(test_config())
}

/// Build the router serving `index.html` from the given directory.
pub fn build_static_app(dir: PathBuf) -> Router {
    let mut config = test_config();
    config.static_dir = Some(dir);
    build_app_with(config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(json.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, None, Some(body.to_string())).await
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<String>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let body = match body {
        Some(body) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `name=value` pair of the first `Set-Cookie` header, ready to send back.
pub fn set_cookie_pair(response: &Response) -> String {
    set_cookie(response)
        .split(';')
        .next()
        .unwrap()
        .trim()
        .to_string()
}

/// The full first `Set-Cookie` header value.
pub fn set_cookie(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("response must set a cookie")
        .to_str()
        .unwrap()
        .to_string()
}
