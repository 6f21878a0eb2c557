//! Catch-all for the console bundle, or the informational page when it is not installed.

use crate::handlers::{console_index, console_missing};
use axum::{routing::get, routing::MethodRouter, Router};
use std::path::Path;
use tower_http::services::ServeDir;

/// Static files from `console_dir` with SPA fallback to its `index.html`. When the directory
/// does not exist, every unmatched path gets the informational page (API prefixes excepted).
pub fn console_routes(console_dir: &Path) -> Router {
    if !console_dir.is_dir() {
        tracing::warn!(dir = %console_dir.display(), "console bundle not found, serving informational page");
        return Router::new().fallback(console_missing);
    }
    let index = console_dir.join("index.html");
    let spa: MethodRouter = get(move || {
        let index = index.clone();
        async move { console_index(&index).await }
    });
    Router::new().fallback_service(ServeDir::new(console_dir).fallback(spa))
}
