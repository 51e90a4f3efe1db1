//! Farol Store - weekly metrics data access
//!
//! A unified interface over the backends that hold Farol's weekly metric
//! rows:
//!
//! - **PostgREST**: the hosted relational backend (production)
//! - **Memory**: fixture rows for tests and local development
//!
//! Backends return plain row shapes ([`WeeklyRow`], [`UrlWeeklyRow`]);
//! all aggregation and delta math lives in `farol-analytics`.
//!
//! # Usage
//!
//! ```ignore
//! use farol_store::{MetricsStore, PostgrestBackend, PostgrestConfig};
//!
//! let config = PostgrestConfig::new("https://db.example.co", "publishable-key");
//! let store = PostgrestBackend::new(&config)?;
//!
//! let weeks = vec!["2025-06-01".to_string(), "2025-06-08".to_string()];
//! let rows = store.site_weekly(&weeks).await?;
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod rows;

// Re-exports
pub use backend::memory::MemoryStore;
pub use backend::postgrest::PostgrestBackend;
pub use backend::MetricsStore;
pub use config::PostgrestConfig;
pub use error::StoreError;
pub use rows::{UrlWeeklyRow, WeeklyRow};
