#![allow(dead_code)]

use axum::body::{self, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use console_adapter::{adapter_routes, AdapterSettings, AppState};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt as _;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub dir: TempDir,
}

impl TestApp {
    pub fn config_path(&self) -> std::path::PathBuf {
        self.dir.path().join("postgraphile-config.yml")
    }
}

/// App with an optional config file and no console bundle.
pub async fn app(config: Option<&str>, upstream_url: &str) -> TestApp {
    app_with_console(config, upstream_url, None).await
}

pub async fn app_with_console(config: Option<&str>, upstream_url: &str, console_dir: Option<&Path>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("postgraphile-config.yml");
    if let Some(contents) = config {
        std::fs::write(&config_path, contents).unwrap();
    }
    let settings = AdapterSettings {
        upstream_url: upstream_url.to_string(),
        config_path,
        database_url: Some("postgres://env@localhost/env".to_string()),
        console_dir: console_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dir.path().join("no-console")),
        ..AdapterSettings::default()
    };
    let state = AppState::from_settings(&settings).await;
    let router = adapter_routes(state.clone(), &settings.console_dir);
    TestApp { router, state, dir }
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(router, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
    send(router, req).await
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Address on which nothing listens: bind an ephemeral port, then release it.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
