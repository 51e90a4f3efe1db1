//! HTTP server configuration

use serde::Deserialize;

/// HTTP server configuration
///
/// # Example
///
/// ```toml
/// [server]
/// listen_addr = "0.0.0.0:8080"
/// cors_origins = ["https://dashboard.example.com"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind
    /// Default: "0.0.0.0:8080"
    pub listen_addr: String,

    /// Allowed CORS origins for the dashboard frontend.
    /// Empty means no CORS headers are emitted (same-origin only).
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            cors_origins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
listen_addr = "127.0.0.1:3000"
cors_origins = ["http://localhost:5173"]
"#;
        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.cors_origins, ["http://localhost:5173"]);
    }
}
