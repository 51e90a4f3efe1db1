//! Dashboard routes
//!
//! Site-wide summary cards, chart series, and the week listing.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use farol_analytics::{MetricDeltas, MetricsWithDelta, WeeklyPoint};

use crate::error::Result;
use crate::state::AppState;
use crate::types::{ApiResponse, SummaryParams, WeeksParams};

/// Build the dashboard router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/weekly", get(get_weekly))
}

/// Build the week-listing router
pub fn weeks_routes() -> Router<AppState> {
    Router::new().route("/weeks", get(get_weeks))
}

/// A metric summary plus the display deltas derived from it.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Totals and reconciled baseline
    #[serde(flatten)]
    pub metrics: MetricsWithDelta,

    /// Deltas computed from `(totals, previous_period)`. Consumers that
    /// derive further values must apply the same primitives to the same
    /// pair; nothing recomputes a delta any other way.
    pub deltas: MetricDeltas,
}

impl SummaryResponse {
    pub(crate) fn from_metrics(metrics: MetricsWithDelta) -> Self {
        let deltas = MetricDeltas::between(&metrics.totals, metrics.previous_period.as_ref());
        Self { metrics, deltas }
    }
}

/// GET /api/v1/dashboard/summary - site-wide totals with deltas
async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<ApiResponse<SummaryResponse>>> {
    let selection = params.to_selection(&state.engine).await?;
    let metrics = state.engine.site_summary(&selection).await?;
    Ok(Json(ApiResponse::new(SummaryResponse::from_metrics(metrics))))
}

/// GET /api/v1/dashboard/weekly - per-week chart series
async fn get_weekly(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<ApiResponse<Vec<WeeklyPoint>>>> {
    let selection = params.to_selection(&state.engine).await?;
    let points = state.engine.site_weekly(&selection).await?;
    Ok(Json(ApiResponse::new(points)))
}

/// GET /api/v1/weeks - available reporting weeks, newest first
async fn get_weeks(
    State(state): State<AppState>,
    Query(params): Query<WeeksParams>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let weeks = state.engine.store().list_weeks(params.limit).await?;
    Ok(Json(ApiResponse::new(weeks)))
}
