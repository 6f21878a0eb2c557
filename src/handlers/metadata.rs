//! `POST /v1/metadata`: export and reload.

use crate::extractors::Dispatch;
use crate::metadata::export;
use crate::requests::MetadataOperation;
use crate::response::message;
use crate::state::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn metadata(
    State(state): State<AppState>,
    Dispatch(operation): Dispatch<MetadataOperation>,
) -> Response {
    match operation {
        MetadataOperation::ExportMetadata => {
            let config = state.config.snapshot();
            Json(export(&config)).into_response()
        }
        MetadataOperation::ReloadMetadata => {
            // Reload failures are logged by the store; the caller always sees success.
            state.config.reload().await;
            Json(message("success")).into_response()
        }
    }
}
