//! Server Configuration
//!
//! Layered: built-in defaults, then an optional config file, then
//! `ADDRESSBOOK_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Config file looked up when no explicit path is given (any format the
/// `config` crate understands, e.g. `addressbook.toml`)
pub const DEFAULT_CONFIG_NAME: &str = "addressbook";

/// Where addresses are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    Sqlite,
    Memory,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,
    /// sqlx connection URL, used when `storage` is `sqlite`
    pub database_url: String,
    pub storage: StorageMode,
    /// trace, debug, info, warn or error
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            database_url: "sqlite://addressbook.db?mode=rwc".to_string(),
            storage: StorageMode::Sqlite,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration, reading `path` if given or `addressbook.*` from
    /// the working directory otherwise. A missing file is not an error.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("database_url", defaults.database_url)?
            .set_default("storage", "sqlite")?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .add_source(File::with_name(path.unwrap_or(DEFAULT_CONFIG_NAME)).required(false))
            .add_source(Environment::with_prefix("ADDRESSBOOK").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
