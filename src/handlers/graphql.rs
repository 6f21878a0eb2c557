//! `POST /v1/graphql`: pass-through to the upstream GraphQL endpoint.

use crate::error::AppError;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};

/// Forward body and headers as received; answer with the upstream's status and JSON body.
pub async fn graphql(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let upstream = state.upstream.forward_graphql(&headers, body).await?;
    Ok((
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response())
}
