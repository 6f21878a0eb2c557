//! Shared application state for all routes. Config is reloadable via `reload_metadata`.

use crate::config::{AdapterConfig, AdapterSettings, ConfigStore};
use crate::upstream::UpstreamClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ConfigStore>,
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Load the config file named by `settings` (defaults on failure) and set up the upstream client.
    pub async fn from_settings(settings: &AdapterSettings) -> Self {
        let defaults = AdapterConfig::with_connection(settings.database_url.clone());
        let config = ConfigStore::initialize(settings.config_path.clone(), defaults).await;
        Self {
            config: Arc::new(config),
            upstream: UpstreamClient::new(settings.upstream_url.clone()),
        }
    }
}
