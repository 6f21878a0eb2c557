//! HTTP client for the PostGraphile server the GraphQL route forwards to.

use crate::error::AppError;
use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};

/// Request headers that describe the inbound connection rather than the request, plus
/// `accept-encoding` so the upstream answers with a body we can check as plain JSON.
const SKIPPED_HEADERS: [HeaderName; 10] = [
    header::HOST,
    header::CONTENT_LENGTH,
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::ACCEPT_ENCODING,
];

#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

/// Upstream answer, passed back to the caller unchanged.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url.trim_end_matches('/'))
    }

    /// POST `body` to the upstream GraphQL endpoint with the caller's headers. No timeout or retry.
    pub async fn forward_graphql(&self, headers: &HeaderMap, body: Bytes) -> Result<UpstreamResponse, AppError> {
        let url = self.graphql_url();
        tracing::debug!(url = %url, bytes = body.len(), "forwarding graphql request");
        let response = self
            .http
            .post(&url)
            .headers(forwarded_headers(headers))
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(error_chain(&e)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(error_chain(&e)))?;
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)
            .map_err(|e| AppError::UpstreamResponse(e.to_string()))?;
        Ok(UpstreamResponse { status, body })
    }
}

/// Copy of the caller's headers minus connection-level ones. JSON content type when none was sent.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len() + 1);
    for (name, value) in headers {
        if !SKIPPED_HEADERS.contains(name) && name.as_str() != "keep-alive" {
            out.append(name.clone(), value.clone());
        }
    }
    if !out.contains_key(header::CONTENT_TYPE) {
        out.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    out
}

/// Error message followed by its chain of causes, e.g. "error sending request: connection refused".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
