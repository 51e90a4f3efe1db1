//! Analytics error types

use thiserror::Error;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Malformed week bucket key
    #[error("invalid week key: {0} (use YYYY-MM-DD)")]
    InvalidWeek(String),

    /// A selection must contain at least one week
    #[error("empty week selection")]
    EmptySelection,

    /// Store error
    #[error("store error: {0}")]
    Store(#[from] farol_store::StoreError),
}

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
