//! Load the adapter config from a YAML file and keep it in a reloadable slot.

use crate::config::types::AdapterConfig;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Parse a YAML document into the adapter config.
pub fn parse_config(contents: &str) -> Result<AdapterConfig, ConfigError> {
    serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Read and parse the config file at `path`. Missing file is `ConfigError::Missing`.
pub async fn load_from_path(path: &Path) -> Result<AdapterConfig, ConfigError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::Missing(path.to_path_buf()))
        }
        Err(e) => return Err(ConfigError::Read(e.to_string())),
    };
    parse_config(&contents)
}

/// Shared configuration slot. Readers get an immutable snapshot; reload swaps the whole value.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    current: RwLock<Arc<AdapterConfig>>,
}

impl ConfigStore {
    /// Load `path`, or keep `defaults` when the file is missing or unreadable. Never fails.
    pub async fn initialize(path: impl Into<PathBuf>, defaults: AdapterConfig) -> Self {
        let store = Self {
            path: path.into(),
            current: RwLock::new(Arc::new(defaults)),
        };
        store.reload().await;
        store
    }

    /// Re-read the config file. On success the config is replaced wholesale; on failure the
    /// previous config stays. Returns whether the config was replaced.
    pub async fn reload(&self) -> bool {
        match load_from_path(&self.path).await {
            Ok(config) => {
                self.replace(config);
                tracing::info!(path = %self.path.display(), "config loaded");
                true
            }
            Err(ConfigError::Missing(path)) => {
                tracing::warn!(path = %path.display(), "config file not found, keeping current config");
                false
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "config load failed, keeping current config");
                false
            }
        }
    }

    /// Current config snapshot.
    pub fn snapshot(&self) -> Arc<AdapterConfig> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn replace(&self, config: AdapterConfig) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(config);
    }
}
