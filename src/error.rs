//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),
    #[error("config read: {0}")]
    Read(String),
    #[error("config parse: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Discriminator not in the route's dispatch table. The argument names the route ("metadata", "query").
    #[error("Unknown {0} operation")]
    UnknownOperation(&'static str),
    #[error("invalid arguments for {operation}: {reason}")]
    InvalidArgs { operation: &'static str, reason: String },
    #[error("{0}")]
    BadRequest(String),
    /// Transport failure talking to the upstream; carries the error text including its causes.
    #[error("{0}")]
    Upstream(String),
    #[error("invalid upstream response: {0}")]
    UpstreamResponse(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownOperation(_) | AppError::InvalidArgs { .. } | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Upstream(_) | AppError::UpstreamResponse(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(crate::response::error_body(self.to_string()))).into_response()
    }
}
