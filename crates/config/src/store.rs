//! Store backend settings
//!
//! Selects the metrics store backend and resolves the hosted environment.
//! Staging values fall back to production so a half-configured staging
//! section degrades to production instead of breaking.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Store backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Hosted PostgREST backend (production)
    #[default]
    Postgrest,
    /// In-memory fixture backend (local/tests)
    Memory,
}

/// Hosted backend environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production database (default)
    #[default]
    Production,
    /// Staging database
    Staging,
}

impl Environment {
    /// Parse an environment name, as used by the `FAROL_ENVIRONMENT`
    /// override.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            _ => None,
        }
    }
}

/// Store settings
///
/// # Example
///
/// ```toml
/// [store]
/// backend = "postgrest"
/// environment = "production"
/// url = "https://db.example.co"
/// api_key = "publishable-key"
///
/// # optional staging variants; unset fields fall back to production
/// staging_url = "https://staging-db.example.co"
/// staging_api_key = "staging-key"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Backend type (postgrest, memory)
    /// Default: postgrest
    pub backend: BackendKind,

    /// Environment to read from. The `FAROL_ENVIRONMENT` env var takes
    /// precedence; resolution happens in the binary at startup.
    pub environment: Environment,

    /// Production base URL
    pub url: Option<String>,

    /// Production publishable API key
    pub api_key: Option<String>,

    /// Staging base URL (falls back to `url` when unset)
    pub staging_url: Option<String>,

    /// Staging publishable API key (falls back to `api_key` when unset)
    pub staging_api_key: Option<String>,

    /// Database schema exposed over REST
    /// Default: "public"
    pub schema: Option<String>,

    /// Request timeout in seconds
    /// Default: 10
    pub timeout_secs: Option<u64>,
}

impl StoreSettings {
    /// Resolve connection values for an environment.
    ///
    /// Only publishable keys belong here; service-role credentials never
    /// reach this config.
    pub fn resolve(&self, environment: Environment) -> Result<ResolvedStore> {
        let (url, api_key) = match environment {
            Environment::Staging => (
                self.staging_url.clone().or_else(|| self.url.clone()),
                self.staging_api_key.clone().or_else(|| self.api_key.clone()),
            ),
            Environment::Production => (self.url.clone(), self.api_key.clone()),
        };

        match self.backend {
            BackendKind::Memory => Ok(ResolvedStore::Memory),
            BackendKind::Postgrest => {
                let url =
                    url.ok_or_else(|| ConfigError::missing_store_field("url", "postgrest"))?;
                let api_key = api_key
                    .ok_or_else(|| ConfigError::missing_store_field("api_key", "postgrest"))?;

                Ok(ResolvedStore::Postgrest {
                    url,
                    api_key,
                    schema: self.schema.clone().unwrap_or_else(|| "public".to_string()),
                    timeout_secs: self.timeout_secs.unwrap_or(10),
                })
            }
        }
    }
}

/// Resolved store connection values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedStore {
    /// Hosted PostgREST connection
    Postgrest {
        /// Base URL
        url: String,
        /// Publishable API key
        api_key: String,
        /// Database schema
        schema: String,
        /// Request timeout in seconds
        timeout_secs: u64,
    },
    /// In-memory fixture backend
    Memory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_resolution_uses_primary_values() {
        let settings: StoreSettings = toml::from_str(
            r#"
url = "https://prod.example.co"
api_key = "prod-key"
"#,
        )
        .unwrap();

        match settings.resolve(Environment::Production).unwrap() {
            ResolvedStore::Postgrest { url, api_key, schema, timeout_secs } => {
                assert_eq!(url, "https://prod.example.co");
                assert_eq!(api_key, "prod-key");
                assert_eq!(schema, "public");
                assert_eq!(timeout_secs, 10);
            }
            ResolvedStore::Memory => panic!("expected postgrest"),
        }
    }

    #[test]
    fn staging_falls_back_to_production_values() {
        let settings: StoreSettings = toml::from_str(
            r#"
url = "https://prod.example.co"
api_key = "prod-key"
staging_url = "https://staging.example.co"
"#,
        )
        .unwrap();

        match settings.resolve(Environment::Staging).unwrap() {
            ResolvedStore::Postgrest { url, api_key, .. } => {
                assert_eq!(url, "https://staging.example.co");
                // no staging key configured -> production key stands in
                assert_eq!(api_key, "prod-key");
            }
            ResolvedStore::Memory => panic!("expected postgrest"),
        }
    }

    #[test]
    fn postgrest_requires_url_and_key() {
        let settings = StoreSettings::default();
        assert!(settings.resolve(Environment::Production).is_err());

        let settings: StoreSettings =
            toml::from_str("url = \"https://prod.example.co\"").unwrap();
        assert!(settings.resolve(Environment::Production).is_err());
    }

    #[test]
    fn memory_backend_needs_no_connection_values() {
        let settings: StoreSettings = toml::from_str("backend = \"memory\"").unwrap();
        assert_eq!(
            settings.resolve(Environment::Production).unwrap(),
            ResolvedStore::Memory
        );
    }

    #[test]
    fn environment_parse_accepts_shorthand() {
        assert_eq!(Environment::parse("prod"), Some(Environment::Production));
        assert_eq!(Environment::parse("Production"), Some(Environment::Production));
        assert_eq!(Environment::parse("staging"), Some(Environment::Staging));
        assert_eq!(Environment::parse("qa"), None);
    }
}
