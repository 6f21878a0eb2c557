//! HTTP handlers for the console API and the console bundle.

pub mod console;
pub mod graphql;
pub mod metadata;
pub mod query;
pub use console::*;
pub use graphql::*;
pub use metadata::*;
pub use query::*;
