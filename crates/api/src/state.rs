//! Application state
//!
//! Shared state for API handlers.

use std::sync::Arc;

use farol_analytics::SummaryEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Summary engine for dashboard queries
    pub engine: Arc<SummaryEngine>,
}

impl AppState {
    /// Create state around a summary engine
    pub fn new(engine: SummaryEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
