mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{app, post_json, send};
use serde_json::{json, Value};

#[tokio::test]
async fn run_sql_returns_placeholder_tuples() {
    let app = app(None, "http://localhost:5000").await;
    let (status, body) = post_json(
        &app.router,
        "/v2/query",
        json!({ "type": "run_sql", "args": { "sql": "select * from users", "source": "default" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result_type": "TuplesOk", "result": [["column1"], ["value1"]] }));
}

#[tokio::test]
async fn run_sql_without_sql_is_rejected() {
    let app = app(None, "http://localhost:5000").await;
    let (status, body) = post_json(&app.router, "/v2/query", json!({ "type": "run_sql", "args": {} })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("invalid arguments for run_sql"));
}

#[tokio::test]
async fn track_and_untrack_acknowledge() {
    let app = app(None, "http://localhost:5000").await;
    let (status, body) = post_json(
        &app.router,
        "/v2/query",
        json!({ "type": "track_table", "args": { "table": { "schema": "public", "name": "users" } } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Table tracked" }));

    let (status, body) = post_json(
        &app.router,
        "/v2/query",
        json!({ "type": "untrack_table", "args": { "schema": "public", "name": "users" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Table untracked" }));
}

#[tokio::test]
async fn unknown_query_operation_is_400() {
    let app = app(None, "http://localhost:5000").await;
    let (status, body) = post_json(&app.router, "/v2/query", json!({ "type": "bogus", "args": {} })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Unknown query operation" }));
}

#[tokio::test]
async fn invalid_json_body_is_400_with_error_field() {
    let app = app(None, "http://localhost:5000").await;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/v2/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, bytes) = send(&app.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn body_without_json_content_type_still_dispatches() {
    let app = app(None, "http://localhost:5000").await;
    for content_type in [None, Some("text/plain")] {
        let mut builder = Request::builder().method(Method::POST).uri("/v2/query");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(r#"{"type":"bogus"}"#)).unwrap();
        let (status, bytes) = send(&app.router, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Unknown query operation" }));
    }

    let req = Request::builder()
        .method(Method::POST)
        .uri("/v2/query")
        .body(Body::from(r#"{"type":"track_table","args":{"table":"users"}}"#))
        .unwrap();
    let (status, bytes) = send(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "message": "Table tracked" }));
}

#[tokio::test]
async fn empty_body_is_unknown_operation() {
    let app = app(None, "http://localhost:5000").await;
    let req = Request::builder().method(Method::POST).uri("/v1/metadata").body(Body::empty()).unwrap();
    let (status, bytes) = send(&app.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Unknown metadata operation" }));
}
