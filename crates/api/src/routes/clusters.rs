//! Cluster routes
//!
//! Per-cluster summary, chart series, and the sortable URL table.

use std::cmp::Ordering;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use farol_analytics::{resolve_sort_value, UrlAggregates, WeeklyPoint};

use crate::error::Result;
use crate::routes::dashboard::SummaryResponse;
use crate::state::AppState;
use crate::types::{ApiResponse, SortDirection, SummaryParams, UrlTableParams};

/// Build the clusters router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/summary", get(get_cluster_summary))
        .route("/{id}/weekly", get(get_cluster_weekly))
        .route("/{id}/urls", get(get_cluster_urls))
}

/// GET /api/v1/clusters/{id}/summary - cluster totals with deltas
async fn get_cluster_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<ApiResponse<SummaryResponse>>> {
    let selection = params.to_selection(&state.engine).await?;
    let metrics = state.engine.cluster_summary(&id, &selection).await?;
    Ok(Json(ApiResponse::new(SummaryResponse::from_metrics(metrics))))
}

/// GET /api/v1/clusters/{id}/weekly - per-week chart series for a cluster
async fn get_cluster_weekly(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<ApiResponse<Vec<WeeklyPoint>>>> {
    let selection = params.to_selection(&state.engine).await?;
    let points = state.engine.cluster_weekly(&id, &selection).await?;
    Ok(Json(ApiResponse::new(points)))
}

/// GET /api/v1/clusters/{id}/urls - aggregated URL rows, sorted
async fn get_cluster_urls(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UrlTableParams>,
) -> Result<Json<ApiResponse<Vec<UrlAggregates>>>> {
    let selection = params.to_selection(&state.engine).await?;
    let rows = state.engine.cluster_urls(&id, &selection).await?;
    let sorted = sort_rows(rows, &params.sort, params.delta, params.dir);
    Ok(Json(ApiResponse::new(sorted)))
}

/// Order table rows with the shared sort-value resolver, so the API and
/// any client-side sorting agree on the same ordering.
fn sort_rows(
    rows: Vec<UrlAggregates>,
    field: &str,
    delta_mode: bool,
    direction: SortDirection,
) -> Vec<UrlAggregates> {
    let mut keyed: Vec<(f64, UrlAggregates)> = rows
        .into_iter()
        .map(|row| {
            let value = match serde_json::to_value(&row) {
                Ok(serde_json::Value::Object(map)) => resolve_sort_value(&map, field, delta_mode),
                _ => 0.0,
            };
            (value, row)
        })
        .collect();

    keyed.sort_by(|a, b| {
        let ord = a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: &str, conversions: f64, ctr_delta: Option<f64>) -> UrlAggregates {
        UrlAggregates {
            url: url.to_string(),
            name: None,
            impressions: 0.0,
            clicks: 0.0,
            conversions,
            ctr_average: 0.0,
            position_average: 0.0,
            impressions_delta_pct: None,
            clicks_delta_pct: None,
            conversions_delta_pct: None,
            ctr_delta,
            position_delta: None,
        }
    }

    #[test]
    fn sorts_descending_by_default_field() {
        let rows = vec![row("a", 1.0, None), row("b", 3.0, None), row("c", 2.0, None)];
        let sorted = sort_rows(rows, "conversions", false, SortDirection::Desc);
        let urls: Vec<&str> = sorted.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["b", "c", "a"]);
    }

    #[test]
    fn delta_mode_orders_by_companion() {
        let rows = vec![
            row("a", 10.0, Some(-0.5)),
            row("b", 1.0, Some(2.0)),
            row("c", 5.0, None),
        ];
        let sorted = sort_rows(rows, "ctr_average", true, SortDirection::Desc);
        let urls: Vec<&str> = sorted.iter().map(|r| r.url.as_str()).collect();
        // missing companion coerces to 0, landing between the two others
        assert_eq!(urls, ["b", "c", "a"]);
    }

    #[test]
    fn ascending_direction_reverses() {
        let rows = vec![row("a", 1.0, None), row("b", 3.0, None)];
        let sorted = sort_rows(rows, "conversions", false, SortDirection::Asc);
        let urls: Vec<&str> = sorted.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["a", "b"]);
    }
}
