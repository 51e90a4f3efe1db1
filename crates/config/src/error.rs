//! Configuration error types

use std::io;

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error - required field missing
    #[error("store config is missing required field '{field}' for the {backend} backend")]
    MissingStoreField {
        /// Missing field name
        field: &'static str,
        /// Backend requiring the field
        backend: &'static str,
    },
}

impl ConfigError {
    /// Create a MissingStoreField error
    pub fn missing_store_field(field: &'static str, backend: &'static str) -> Self {
        Self::MissingStoreField { field, backend }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_store_field_error() {
        let err = ConfigError::missing_store_field("url", "postgrest");
        assert!(err.to_string().contains("url"));
        assert!(err.to_string().contains("postgrest"));
    }
}
