//! Operations routes
//!
//! Health endpoints for load balancers and uptime checks.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Build the ops router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/store", get(health_store))
}

/// Health response body
#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    store: &'static str,
}

/// GET /health - liveness
async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        store: state.engine.store().name(),
    })
}

/// GET /health/store - store reachability
async fn health_store(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    let store = state.engine.store();
    match store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Health {
                status: "ok",
                store: store.name(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Health {
                    status: "unavailable",
                    store: store.name(),
                }),
            )
        }
    }
}
