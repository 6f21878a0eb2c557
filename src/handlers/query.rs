//! `POST /v2/query`: SQL and table tracking. Nothing here touches a database.

use crate::extractors::Dispatch;
use crate::requests::QueryOperation;
use crate::response::{message, placeholder_sql_result};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn query(Dispatch(operation): Dispatch<QueryOperation>) -> Response {
    match operation {
        QueryOperation::RunSql(args) => {
            tracing::debug!(sql = %args.sql, read_only = args.read_only, "run_sql answered with placeholder result");
            Json(placeholder_sql_result()).into_response()
        }
        QueryOperation::TrackTable(table) => {
            tracing::info!(schema = %table.schema, name = %table.name, "track_table");
            Json(message("Table tracked")).into_response()
        }
        QueryOperation::UntrackTable(table) => {
            tracing::info!(schema = %table.schema, name = %table.name, "untrack_table");
            Json(message("Table untracked")).into_response()
        }
    }
}
