//! Store error types

/// Errors from metrics store backends
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend unreachable
    #[error("connection failed: {0}")]
    Connection(String),

    /// Backend rejected the request
    #[error("request failed: {0}")]
    Request(String),

    /// Response could not be decoded
    #[error("decode failed: {0}")]
    Decode(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
