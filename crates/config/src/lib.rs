//! Farol Configuration
//!
//! TOML-based configuration loading with sensible defaults. A minimal
//! config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use farol_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[log]\nlevel = \"debug\"").unwrap();
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:8080"
//! cors_origins = ["https://dashboard.example.com"]
//!
//! [log]
//! level = "info"
//! format = "console"
//!
//! [store]
//! backend = "postgrest"
//! environment = "production"
//! url = "https://db.example.co"
//! api_key = "publishable-key"
//! ```

mod error;
mod logging;
mod server;
mod store;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use server::ServerConfig;
pub use store::{BackendKind, Environment, ResolvedStore, StoreSettings};

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Logging configuration
    pub log: LogConfig,

    /// Metrics store settings
    pub store: StoreSettings,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        Ok(config)
    }
}
