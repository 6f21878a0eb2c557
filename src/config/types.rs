//! Raw config types matching the adapter's YAML file (database, server, graphql, tables, ...).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_SERVER_HOST: &str = "localhost";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "/graphql";

/// Whole configuration file. Sections missing from the file take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub graphql: GraphQLConfig,
    #[serde(default, deserialize_with = "lenient_tables", skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<TableConfig>>,
    /// Accepted and kept, never consumed by the metadata export.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<RelationshipConfig>>,
    /// Accepted and kept, never consumed by the metadata export.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionsConfig>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesConfig>,
}

/// Optional field that never fails the file: a value of the wrong shape is logged and left absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = serde_yaml::Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    match serde_yaml::from_value(raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed config value");
            Ok(None)
        }
    }
}

/// Table list where each entry is read on its own; an entry that is not a mapping becomes an
/// empty descriptor instead of failing the list.
fn lenient_tables<'de, D>(deserializer: D) -> Result<Option<Vec<TableConfig>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<serde_yaml::Value>> = lenient(deserializer)?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .map(|entry| {
                serde_yaml::from_value(entry).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "ignoring malformed table descriptor");
                    TableConfig::default()
                })
            })
            .collect()
    }))
}

impl AdapterConfig {
    /// Built-in configuration used when no file can be loaded. `connection` usually comes from `DATABASE_URL`.
    pub fn with_connection(connection: Option<String>) -> Self {
        Self {
            database: DatabaseConfig {
                connection,
                ..DatabaseConfig::default()
            },
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default = "default_schemas")]
    pub schemas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<DatabaseOptions>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection: None,
            schemas: default_schemas(),
            options: None,
        }
    }
}

fn default_schemas() -> Vec<String> {
    vec![DEFAULT_SCHEMA.to_string()]
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_json: Option<bool>,
    #[serde(default, rename = "ignoreRBAC", skip_serializing_if = "Option::is_none")]
    pub ignore_rbac: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_indexes: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_server_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            host: DEFAULT_SERVER_HOST.to_string(),
        }
    }
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

fn default_server_host() -> String {
    DEFAULT_SERVER_HOST.to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQLConfig {
    #[serde(default = "default_graphql_endpoint")]
    pub endpoint: String,
    /// Introspection / GraphiQL toggle.
    #[serde(default = "default_true")]
    pub graphiql: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GraphQLOptions>,
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            graphiql: true,
            options: None,
        }
    }
}

fn default_graphql_endpoint() -> String {
    DEFAULT_GRAPHQL_ENDPOINT.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_pg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhance_graphiql: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_query_batching: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_relations: Option<String>,
}

/// Schema-qualified table name. Either part may be missing in hand-written files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTableReference")]
pub struct TableReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Tables may be written as `{schema, name}` or as a bare name.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTableReference {
    Bare(String),
    Qualified {
        #[serde(default)]
        schema: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<RawTableReference> for TableReference {
    fn from(raw: RawTableReference) -> Self {
        match raw {
            RawTableReference::Bare(name) => TableReference {
                schema: None,
                name: Some(name),
            },
            RawTableReference::Qualified { schema, name } => TableReference { schema, name },
        }
    }
}

/// Column list of a permission rule: explicit names or the `"*"` wildcard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionColumns {
    List(Vec<String>),
    Wildcard(String),
}

impl Default for PermissionColumns {
    fn default() -> Self {
        PermissionColumns::List(Vec::new())
    }
}

/// Rule body. Keys beyond `columns`/`filter`/`check` (`limit`, `set`, `allow_aggregation`, ...) are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionRule {
    #[serde(default)]
    pub columns: PermissionColumns,
    #[serde(default)]
    pub filter: Map<String, Value>,
    /// Row check used by insert/update rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub role: String,
    #[serde(default)]
    pub permission: PermissionRule,
    /// Entry-level keys such as `comment`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Table descriptor as authored in the console's metadata. Unknown keys are dropped on parse;
/// a field of the wrong shape is left absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub table: Option<TableReference>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub select_permissions: Option<Vec<Permission>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub insert_permissions: Option<Vec<Permission>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub update_permissions: Option<Vec<Permission>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub delete_permissions: Option<Vec<Permission>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Object,
    Array,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelationshipConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<RelationshipKind>,
    #[serde(default, deserialize_with = "lenient")]
    pub from_table: Option<TableReference>,
    #[serde(default, deserialize_with = "lenient")]
    pub to_table: Option<TableReference>,
    #[serde(default, deserialize_with = "lenient")]
    pub mapping: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermissionsConfig {
    #[serde(default)]
    pub default_role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub roles: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesConfig {
    #[serde(default = "default_true")]
    pub allow_introspection: bool,
    #[serde(default)]
    pub enable_subscriptions: bool,
    #[serde(default = "default_true")]
    pub enable_mutations: bool,
}
