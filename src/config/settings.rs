//! Process settings read once at startup from the environment.

use std::path::PathBuf;

pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:5000";
pub const DEFAULT_CONFIG_PATH: &str = "./postgraphile-config.yml";
pub const DEFAULT_CONSOLE_DIR: &str = "hasura-console";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq)]
pub struct AdapterSettings {
    /// Base URL of the PostGraphile server; `/graphql` is appended when proxying.
    pub upstream_url: String,
    pub config_path: PathBuf,
    pub database_url: Option<String>,
    /// Directory holding the pre-built console bundle.
    pub console_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            database_url: None,
            console_dir: PathBuf::from(DEFAULT_CONSOLE_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AdapterSettings {
    /// Read `POSTGRAPHILE_URL`, `CONFIG_PATH`, `DATABASE_URL`, `CONSOLE_DIR`, `HOST` and `PORT`,
    /// after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };
        Self {
            upstream_url: var("POSTGRAPHILE_URL").unwrap_or(defaults.upstream_url),
            config_path: var("CONFIG_PATH").map(PathBuf::from).unwrap_or(defaults.config_path),
            database_url: var("DATABASE_URL"),
            console_dir: var("CONSOLE_DIR").map(PathBuf::from).unwrap_or(defaults.console_dir),
            host: var("HOST").unwrap_or(defaults.host),
            port,
        }
    }
}
