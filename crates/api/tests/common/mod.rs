#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use trainer_api::auth::gate::AdminGate;
use trainer_api::auth::password::hash_password;
use trainer_api::config::ServerConfig;
use trainer_api::router::build_app_router;
use trainer_api::state::AppState;

/// Admin password accepted by every test app.
pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// A router plus the temporary static directory it serves from. Keep the
/// whole struct alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub static_dir: TempDir,
}

/// Build a test `ServerConfig` rooted at `static_dir`.
pub fn test_config(static_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        static_dir,
        admin_hash_file: PathBuf::from(".hashedpass"),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// The static directory contains `html/report.html`, `css/main.css`, and
/// `outside.html` (which the `*.html` passthrough must not reach).
pub fn build_test_app(pool: PgPool) -> TestApp {
    let static_dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(static_dir.path().join("html")).unwrap();
    std::fs::create_dir_all(static_dir.path().join("css")).unwrap();
    std::fs::write(
        static_dir.path().join("html/report.html"),
        "<html><body>quarterly report</body></html>",
    )
    .unwrap();
    std::fs::write(static_dir.path().join("css/main.css"), "body { margin: 0; }").unwrap();
    std::fs::write(static_dir.path().join("outside.html"), "outside the html dir").unwrap();

    let gate = AdminGate::from_hash(hash_password(ADMIN_PASSWORD).unwrap()).unwrap();
    let state = AppState {
        pool,
        config: Arc::new(test_config(static_dir.path().to_path_buf())),
        gate: Arc::new(gate),
    };

    TestApp {
        router: build_app_router(state),
        static_dir,
    }
}

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: &TestApp, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: &TestApp, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    post_raw(app, uri, "application/x-www-form-urlencoded", &body).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
