//! Console API routes: metadata, GraphQL proxy, query.

use crate::handlers::{graphql, metadata, query};
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/metadata", post(metadata))
        .route("/v1/graphql", post(graphql))
        .route("/v2/query", post(query))
        .with_state(state)
}
