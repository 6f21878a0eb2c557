//! Console bundle fallbacks: SPA index and the "console not installed" page.

use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use std::path::Path;

/// Path prefixes owned by the API; the informational page never answers them.
pub const API_PREFIXES: [&str; 2] = ["/v1/", "/v2/"];
pub const HEALTH_PATH: &str = "/healthz";

const NOT_INSTALLED_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Console not installed</title></head>
  <body style="font-family: sans-serif; padding: 40px; max-width: 800px; margin: 0 auto;">
    <h1>Console not installed</h1>
    <p>Run the console sync script (<code>bash sync-hasura-console.sh</code>) to download a pre-built Hasura console,
       or copy a console build into the console directory (see <code>CONSOLE_DIR</code>), then restart the server.</p>
    <hr style="margin: 30px 0;">
    <p><strong>API endpoints are still available:</strong></p>
    <ul>
      <li>Health check: <a href="/healthz">/healthz</a></li>
      <li>GraphQL: POST /v1/graphql</li>
      <li>Metadata: POST /v1/metadata</li>
      <li>Query: POST /v2/query</li>
    </ul>
  </body>
</html>
"#;

pub fn is_api_path(path: &str) -> bool {
    path == HEALTH_PATH || API_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

pub fn not_installed_page() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_INSTALLED_PAGE)).into_response()
}

/// Fallback when no console bundle exists. API paths get a bare 404 instead of the page.
pub async fn console_missing(uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    not_installed_page()
}

/// SPA fallback: serve the bundle's index document for any path without a matching asset.
pub async fn console_index(index: &Path) -> Response {
    match tokio::fs::read(index).await {
        Ok(contents) => Html(contents).into_response(),
        Err(e) => {
            tracing::warn!(path = %index.display(), error = %e, "console index unavailable");
            not_installed_page()
        }
    }
}
