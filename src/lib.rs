//! Console adapter: serves the Hasura console API on top of a PostGraphile GraphQL server.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metadata;
pub mod requests;
pub mod response;
pub mod routes;
pub mod state;
pub mod upstream;

pub use config::{AdapterConfig, AdapterSettings, ConfigStore};
pub use error::{AppError, ConfigError};
pub use metadata::{export, transform, ExportedMetadata, TransformedTable};
pub use requests::{MetadataOperation, Operation, QueryOperation};
pub use routes::{adapter_routes, api_routes, common_routes, console_routes};
pub use state::AppState;
pub use upstream::UpstreamClient;
