//! Application configuration.

use std::path::{Path, PathBuf};

use ballot_modules_api::config::{from_toml_path, read_json_file};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Default logging directive, used when the config file has none.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Where the genesis configuration lives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LedgerConfig {
    /// Path of the JSON file deserialized into the module's genesis config.
    pub genesis_path: PathBuf,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `info,ballot_stf=debug`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Ledger application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Genesis configuration.
    pub ledger: LedgerConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads the configuration from a TOML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        from_toml_path(path)
    }

    /// Reads the genesis configuration the application points to.
    pub fn genesis_config<G: DeserializeOwned>(&self) -> anyhow::Result<G> {
        read_json_file(&self.ledger.genesis_path)
    }
}
