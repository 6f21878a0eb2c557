//! Route assembly for the adapter.

pub mod api;
pub mod common;
pub mod console;

pub use api::api_routes;
pub use common::common_routes;
pub use console::console_routes;

use crate::response::error_body;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use std::any::Any;
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

/// Full application: health, console API, console bundle; permissive CORS; panics become 500s.
pub fn adapter_routes(state: AppState, console_dir: &Path) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .merge(console_routes(console_dir))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(panic_response))
}

/// 500 `{ "error": <panic message> }`, or "Unknown error" when the payload is not a string.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };
    tracing::error!(error = %message, "handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body(message))).into_response()
}
