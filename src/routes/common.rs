//! Common routes: liveness.

use crate::response::StatusBody;
use axum::{routing::get, Json, Router};

async fn healthz() -> Json<StatusBody> {
    Json(StatusBody { status: "ok" })
}

/// GET /healthz. Independent of config state.
pub fn common_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}
