//! Request envelopes `{ "type": ..., "args": ... }` parsed into typed operations.
//!
//! Dispatch is an exact match on `type`. Operations that take arguments reject
//! malformed `args` with [`AppError::InvalidArgs`]; anything not in the table is
//! [`AppError::UnknownOperation`].

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Parses a JSON request body into one operation of a route's dispatch table.
pub trait Operation: Sized {
    /// Route name used in the "Unknown ... operation" message.
    const ROUTE: &'static str;

    fn dispatch(kind: &str, args: Option<Value>) -> Result<Self, AppError>;

    fn from_body(body: Value) -> Result<Self, AppError> {
        let (kind, args) = match body {
            Value::Object(mut map) => {
                let kind = match map.remove("type") {
                    Some(Value::String(s)) => s,
                    _ => return Err(AppError::UnknownOperation(Self::ROUTE)),
                };
                (kind, map.remove("args").filter(|a| !a.is_null()))
            }
            _ => return Err(AppError::UnknownOperation(Self::ROUTE)),
        };
        Self::dispatch(&kind, args)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MetadataOperation {
    ExportMetadata,
    ReloadMetadata,
}

impl Operation for MetadataOperation {
    const ROUTE: &'static str = "metadata";

    fn dispatch(kind: &str, _args: Option<Value>) -> Result<Self, AppError> {
        match kind {
            "export_metadata" => Ok(MetadataOperation::ExportMetadata),
            "reload_metadata" => Ok(MetadataOperation::ReloadMetadata),
            _ => Err(AppError::UnknownOperation(Self::ROUTE)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QueryOperation {
    RunSql(RunSqlArgs),
    TrackTable(TableArgs),
    UntrackTable(TableArgs),
}

impl Operation for QueryOperation {
    const ROUTE: &'static str = "query";

    fn dispatch(kind: &str, args: Option<Value>) -> Result<Self, AppError> {
        match kind {
            "run_sql" => parse_args("run_sql", args).map(QueryOperation::RunSql),
            "track_table" => parse_args("track_table", args).map(QueryOperation::TrackTable),
            "untrack_table" => parse_args("untrack_table", args).map(QueryOperation::UntrackTable),
            _ => Err(AppError::UnknownOperation(Self::ROUTE)),
        }
    }
}

fn parse_args<T: DeserializeOwned>(operation: &'static str, args: Option<Value>) -> Result<T, AppError> {
    let args = args.ok_or_else(|| AppError::InvalidArgs {
        operation,
        reason: "missing args".into(),
    })?;
    serde_json::from_value(args).map_err(|e| AppError::InvalidArgs {
        operation,
        reason: e.to_string(),
    })
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RunSqlArgs {
    pub sql: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub cascade: bool,
    #[serde(default)]
    pub read_only: bool,
}

/// Table named by a track/untrack request.
#[derive(Clone, Debug, PartialEq)]
pub struct TableArgs {
    pub schema: String,
    pub name: String,
    pub source: Option<String>,
}

impl<'de> Deserialize<'de> for TableArgs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawTableArgs::deserialize(deserializer)?;
        Ok(match raw {
            RawTableArgs::Wrapped { table, source } => {
                let QualifiedTable { schema, name } = table.into();
                TableArgs { schema, name, source }
            }
            RawTableArgs::Qualified(QualifiedTable { schema, name }) => TableArgs {
                schema,
                name,
                source: None,
            },
        })
    }
}

/// Accepted shapes: `{ table: {schema, name} | name, source? }` or `{ schema?, name }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTableArgs {
    Wrapped {
        table: TableTarget,
        #[serde(default)]
        source: Option<String>,
    },
    Qualified(QualifiedTable),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableTarget {
    Qualified(QualifiedTable),
    Bare(String),
}

#[derive(Deserialize)]
struct QualifiedTable {
    #[serde(default = "default_schema")]
    schema: String,
    name: String,
}

impl From<TableTarget> for QualifiedTable {
    fn from(target: TableTarget) -> Self {
        match target {
            TableTarget::Qualified(t) => t,
            TableTarget::Bare(name) => QualifiedTable {
                schema: default_schema(),
                name,
            },
        }
    }
}

fn default_schema() -> String {
    crate::config::DEFAULT_SCHEMA.to_string()
}
