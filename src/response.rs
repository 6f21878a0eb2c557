//! Fixed response bodies of the console API.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// `run_sql` result in the console's tuple format.
#[derive(Debug, Serialize)]
pub struct SqlResult {
    pub result_type: &'static str,
    pub result: Vec<Vec<String>>,
}

pub fn error_body(message: impl Into<String>) -> ErrorBody {
    ErrorBody {
        error: message.into(),
    }
}

pub fn message(message: &'static str) -> MessageBody {
    MessageBody { message }
}

/// Placeholder returned for every `run_sql` call; no statement is executed.
pub fn placeholder_sql_result() -> SqlResult {
    SqlResult {
        result_type: "TuplesOk",
        result: vec![vec!["column1".to_string()], vec!["value1".to_string()]],
    }
}
