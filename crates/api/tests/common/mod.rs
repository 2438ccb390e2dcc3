//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt::oneshot`,
//! so no TCP listener is involved, but the full production middleware stack
//! (CORS, request ID, timeout, tracing, panic recovery, RBAC) is exercised.

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use railasset_api::config::{provision_accounts, ServerConfig};
use railasset_api::router::build_app_router;
use railasset_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the three provisioned
/// dev accounts. Account hashing is done once per test binary.
pub fn test_config() -> ServerConfig {
    static ACCOUNTS: OnceLock<Vec<railasset_api::config::Account>> = OnceLock::new();
    let accounts = ACCOUNTS.get_or_init(provision_accounts).clone();

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        accounts,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Basic auth header value for one of the dev accounts.
pub fn basic_auth(username: &str) -> String {
    let password = match username {
        "admin" => "adminPass!",
        "manager" => "managerPass!",
        "viewer" => "viewerPass!",
        other => panic!("unknown test account: {other}"),
    };
    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
}

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    user: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(header::AUTHORIZATION, basic_auth(user));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, user: Option<&str>) -> Response<Body> {
    send(app, "GET", uri, user, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    user: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, "POST", uri, user, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    user: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, "PUT", uri, user, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, user: Option<&str>) -> Response<Body> {
    send(app, "DELETE", uri, user, None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
