//! API request and response types
//!
//! Shared types for API endpoints including query parameters and response
//! wrappers.

use serde::{Deserialize, Serialize};

use farol_analytics::{SummaryEngine, WeekSelection};

use crate::error::{ApiError, Result};

/// Query parameters for summary and chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    /// Comma-separated week-ending keys (e.g. "2025-06-01,2025-06-08").
    /// Defaults to the latest reporting weeks when omitted.
    pub weeks: Option<String>,
}

impl SummaryParams {
    /// Resolve to a week selection, falling back to the engine's default
    /// window when no weeks were supplied.
    pub async fn to_selection(&self, engine: &SummaryEngine) -> Result<WeekSelection> {
        selection_from(self.weeks.as_deref(), engine).await
    }
}

/// Sort direction for table ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending (default)
    #[default]
    Desc,
}

/// Query parameters for the cluster URL table
#[derive(Debug, Deserialize)]
pub struct UrlTableParams {
    /// Week filter, as for summaries
    pub weeks: Option<String>,

    /// Column to sort by
    #[serde(default = "default_sort_field")]
    pub sort: String,

    /// Sort by delta companions instead of absolute values
    #[serde(default)]
    pub delta: bool,

    /// Sort direction (asc, desc)
    #[serde(default)]
    pub dir: SortDirection,
}

impl UrlTableParams {
    /// Resolve to a week selection, as for [`SummaryParams`].
    pub async fn to_selection(&self, engine: &SummaryEngine) -> Result<WeekSelection> {
        selection_from(self.weeks.as_deref(), engine).await
    }
}

fn default_sort_field() -> String {
    "conversions".to_string()
}

/// Query parameters for the week listing
#[derive(Debug, Deserialize)]
pub struct WeeksParams {
    /// Number of weeks to return, newest first
    #[serde(default = "default_weeks_limit")]
    pub limit: usize,
}

fn default_weeks_limit() -> usize {
    52
}

async fn selection_from(weeks: Option<&str>, engine: &SummaryEngine) -> Result<WeekSelection> {
    match weeks {
        Some(weeks) => {
            WeekSelection::parse(weeks).map_err(|e| ApiError::InvalidWeeks(e.to_string()))
        }
        None => Ok(engine.default_selection().await?),
    }
}

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a new API response
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
