//! Farol Analytics Engine
//!
//! Weekly metric aggregation and period-over-period delta reconciliation
//! for the Farol dashboard.
//!
//! # Overview
//!
//! - **Aggregation**: sums plus impression-weighted CTR and position
//!   averages over weekly rows
//! - **Period split**: early/late halves of a comparison window
//! - **Reconciliation**: back-solved previous-period baselines, so every
//!   consumer derives the same delta from the same structure
//! - **Sort resolution**: absolute vs. delta ordering for table rows
//! - **Engine**: async orchestration over a `MetricsStore` backend,
//!   including the comparison-window widening policy
//!
//! # Usage
//!
//! ```ignore
//! use farol_analytics::{MetricDeltas, SummaryEngine, WeekSelection};
//!
//! let engine = SummaryEngine::new(store);
//! let selection = WeekSelection::parse("2025-06-01,2025-06-08")?;
//! let summary = engine.site_summary(&selection).await?;
//!
//! // The one sanctioned way to turn a summary into display deltas:
//! let deltas = MetricDeltas::between(&summary.totals, summary.previous_period.as_ref());
//! ```

pub mod aggregate;
pub mod delta;
pub mod engine;
pub mod error;
pub mod periods;
pub mod reconcile;
pub mod selection;
pub mod sort;

#[cfg(test)]
mod delta_test;
#[cfg(test)]
mod selection_test;
#[cfg(test)]
mod sort_test;

// Re-exports for convenience
pub use aggregate::{aggregate, MetricValues};
pub use delta::{
    ctr_points_change, percentage_change, position_delta, previous_ctr, previous_from_delta_pct,
    MetricDeltas,
};
pub use engine::{SummaryEngine, UrlAggregates, WeeklyPoint, DEFAULT_WEEK_COUNT};
pub use error::{AnalyticsError, Result};
pub use periods::{split_periods, PeriodSplit};
pub use reconcile::{reconcile, MetricsWithDelta};
pub use selection::WeekSelection;
pub use sort::{delta_field_for, resolve_sort_value};
