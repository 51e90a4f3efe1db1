//! Store backend configuration

/// PostgREST backend connection settings
#[derive(Debug, Clone)]
pub struct PostgrestConfig {
    /// Base URL of the hosted backend (e.g. "https://db.example.co")
    pub url: String,

    /// Publishable API key, sent as both `apikey` and bearer token
    pub api_key: String,

    /// Database schema exposed over REST
    pub schema: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PostgrestConfig {
    /// Create a new config with URL and API key
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            schema: "public".to_string(),
            timeout_secs: 10,
        }
    }

    /// Set the database schema
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
