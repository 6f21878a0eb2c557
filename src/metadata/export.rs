//! Metadata export envelope returned by `export_metadata`.

use crate::config::AdapterConfig;
use crate::metadata::transform::{transform, TransformedTable};
use serde::Serialize;

pub const METADATA_VERSION: u32 = 3;
pub const DEFAULT_SOURCE_NAME: &str = "default";
pub const SOURCE_KIND: &str = "postgres";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportedMetadata {
    pub version: u32,
    pub sources: Vec<MetadataSource>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetadataSource {
    pub name: String,
    pub kind: String,
    pub tables: Vec<TransformedTable>,
    pub configuration: SourceConfiguration,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SourceConfiguration {
    pub connection_info: ConnectionInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConnectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

/// Build the export document: one `default` postgres source holding the transformed tables
/// and the configured connection string as-is.
pub fn export(config: &AdapterConfig) -> ExportedMetadata {
    let tables = config.tables.as_deref().map(transform).unwrap_or_default();
    ExportedMetadata {
        version: METADATA_VERSION,
        sources: vec![MetadataSource {
            name: DEFAULT_SOURCE_NAME.to_string(),
            kind: SOURCE_KIND.to_string(),
            tables,
            configuration: SourceConfiguration {
                connection_info: ConnectionInfo {
                    database_url: config.database.connection.clone(),
                },
            },
        }],
    }
}
