//! API routes
//!
//! Domain-grouped HTTP route handlers.

pub mod clusters;
pub mod dashboard;
pub mod ops;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Operations routes (health - no versioned prefix)
        .merge(ops::routes())
        // Site-wide summary and chart data
        .nest("/api/v1/dashboard", dashboard::routes())
        // Per-cluster summary, chart, and URL table
        .nest("/api/v1/clusters", clusters::routes())
        // Week listing
        .nest("/api/v1", dashboard::weeks_routes())
        .with_state(state)
}
