//! Farol API
//!
//! HTTP API for the Farol dashboard, built on Axum over the
//! `farol-analytics` summary engine.
//!
//! # Usage
//!
//! ```ignore
//! use farol_api::{build_router, AppState};
//! use farol_analytics::SummaryEngine;
//!
//! let engine = SummaryEngine::new(store);
//! let app = build_router(AppState::new(engine));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! # Endpoints
//!
//! - `GET /api/v1/dashboard/summary` - site-wide totals with deltas
//! - `GET /api/v1/dashboard/weekly` - site-wide chart series
//! - `GET /api/v1/clusters/{id}/summary` - cluster totals with deltas
//! - `GET /api/v1/clusters/{id}/weekly` - cluster chart series
//! - `GET /api/v1/clusters/{id}/urls` - sortable URL table rows
//! - `GET /api/v1/weeks` - available reporting weeks
//! - `GET /health`, `GET /health/store` - operations
//!
//! # Query Parameters
//!
//! - `weeks` - comma-separated week-ending keys (`2025-06-01,2025-06-08`);
//!   defaults to the latest reporting weeks
//! - `sort`, `delta`, `dir` - URL table ordering

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

// Re-exports
pub use error::{ApiError, Result};
pub use routes::build_router;
pub use state::AppState;
pub use types::{ApiResponse, SummaryParams, UrlTableParams};
