//! Summary engine
//!
//! Async orchestrator that feeds the pure calculation modules from the
//! metrics store. Every dashboard surface (summary cards, the per-URL
//! table, the weekly chart) goes through this engine, so they all see the
//! same reconciled deltas for the same selection.
//!
//! The engine also owns the comparison-window policy: the delta window
//! equals the selection, except that a single-week selection is widened
//! by the immediately preceding bucket so a comparison is still possible.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use farol_store::{MetricsStore, WeeklyRow};

use crate::aggregate::aggregate;
use crate::delta::MetricDeltas;
use crate::error::Result;
use crate::reconcile::{reconcile, MetricsWithDelta};
use crate::selection::WeekSelection;

/// Buckets in the default selection when the caller supplies none.
pub const DEFAULT_WEEK_COUNT: usize = 12;

/// One aggregated row of the cluster URL table.
///
/// Delta companions are conveniences for table ordering and cell badges;
/// they are absent when the URL had no comparison window or the change is
/// non-finite. The authoritative delta structure remains
/// `{totals, previous_period}` on the summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlAggregates {
    /// Canonical page URL
    pub url: String,
    /// Page title, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Total impressions over the selected weeks
    pub impressions: f64,
    /// Total clicks over the selected weeks
    pub clicks: f64,
    /// Total conversions over the selected weeks
    pub conversions: f64,
    /// Impression-weighted CTR (decimal fraction)
    pub ctr_average: f64,
    /// Impression-weighted average position
    pub position_average: f64,
    /// Impressions change (decimal ratio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions_delta_pct: Option<f64>,
    /// Clicks change (decimal ratio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks_delta_pct: Option<f64>,
    /// Conversions change (decimal ratio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions_delta_pct: Option<f64>,
    /// CTR change in percentage points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctr_delta: Option<f64>,
    /// Position change in ranks (positive is an improvement)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_delta: Option<f64>,
}

/// One point of the weekly chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPoint {
    /// Week bucket key
    pub week_ending: String,
    /// Impressions for the week
    pub impressions: f64,
    /// Clicks for the week
    pub clicks: f64,
    /// Conversions for the week
    pub conversions: f64,
    /// CTR for the week (decimal fraction)
    pub ctr: f64,
    /// Average position for the week
    pub position: f64,
}

/// The two row windows a summary is computed from.
struct Windows {
    /// Rows for exactly the selected buckets (what totals display)
    base: Vec<WeeklyRow>,
    /// Rows for the comparison window (what the delta is computed from)
    delta: Vec<WeeklyRow>,
}

/// Summary engine over a metrics store backend.
pub struct SummaryEngine {
    store: Box<dyn MetricsStore>,
}

impl SummaryEngine {
    /// Create a new engine with a store backend.
    pub fn new(store: Box<dyn MetricsStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for health checks and week listings.
    pub fn store(&self) -> &dyn MetricsStore {
        self.store.as_ref()
    }

    /// Selection of the latest [`DEFAULT_WEEK_COUNT`] buckets.
    pub async fn default_selection(&self) -> Result<WeekSelection> {
        let weeks = self.store.list_weeks(DEFAULT_WEEK_COUNT).await?;
        WeekSelection::new(weeks)
    }

    /// Site-wide summary with reconciled deltas.
    pub async fn site_summary(&self, selection: &WeekSelection) -> Result<MetricsWithDelta> {
        let windows = self.weekly_windows(None, selection).await?;
        Ok(reconcile(&windows.base, &windows.delta))
    }

    /// Summary for one content cluster.
    pub async fn cluster_summary(
        &self,
        cluster_id: &str,
        selection: &WeekSelection,
    ) -> Result<MetricsWithDelta> {
        let windows = self.weekly_windows(Some(cluster_id), selection).await?;
        Ok(reconcile(&windows.base, &windows.delta))
    }

    /// Aggregated per-URL rows for a cluster, each with its own reconciled
    /// delta companions.
    pub async fn cluster_urls(
        &self,
        cluster_id: &str,
        selection: &WeekSelection,
    ) -> Result<Vec<UrlAggregates>> {
        let delta_selection = self.comparison_weeks(selection).await?;
        let rows = self
            .store
            .url_weekly(cluster_id, &delta_selection.to_vec())
            .await?;

        // Comparison-window rows are a superset of the base window, so the
        // base rows per URL come from filtering rather than a second fetch.
        let mut by_url: BTreeMap<String, (Option<String>, Vec<WeeklyRow>)> = BTreeMap::new();
        for row in rows {
            let entry = by_url.entry(row.url).or_default();
            if entry.0.is_none() {
                entry.0 = row.name;
            }
            entry.1.push(row.metrics);
        }

        let mut aggregates = Vec::with_capacity(by_url.len());
        for (url, (name, url_rows)) in by_url {
            let base_rows: Vec<WeeklyRow> = url_rows
                .iter()
                .filter(|row| {
                    row.week_ending
                        .as_deref()
                        .is_some_and(|week| selection.contains(week))
                })
                .cloned()
                .collect();

            let summary = reconcile(&base_rows, &url_rows);
            let deltas = MetricDeltas::between(&summary.totals, summary.previous_period.as_ref());
            let has_previous = summary.previous_period.is_some();

            aggregates.push(UrlAggregates {
                url,
                name,
                impressions: summary.totals.impressions,
                clicks: summary.totals.clicks,
                conversions: summary.totals.conversions,
                ctr_average: summary.totals.ctr,
                position_average: summary.totals.position,
                impressions_delta_pct: companion(has_previous, deltas.impressions_change),
                clicks_delta_pct: companion(has_previous, deltas.clicks_change),
                conversions_delta_pct: companion(has_previous, deltas.conversions_change),
                ctr_delta: companion(has_previous, deltas.ctr_change),
                position_delta: companion(has_previous, deltas.position_change),
            });
        }

        Ok(aggregates)
    }

    /// Per-week chart series across all clusters.
    pub async fn site_weekly(&self, selection: &WeekSelection) -> Result<Vec<WeeklyPoint>> {
        let rows = self.store.site_weekly(&selection.to_vec()).await?;
        Ok(weekly_points(&rows))
    }

    /// Per-week chart series for one cluster.
    pub async fn cluster_weekly(
        &self,
        cluster_id: &str,
        selection: &WeekSelection,
    ) -> Result<Vec<WeeklyPoint>> {
        let rows = self
            .store
            .cluster_weekly(cluster_id, &selection.to_vec())
            .await?;
        Ok(weekly_points(&rows))
    }

    /// Comparison window for a selection: the selection itself, widened by
    /// the immediately preceding bucket when only one week is selected.
    async fn comparison_weeks(&self, selection: &WeekSelection) -> Result<WeekSelection> {
        if !selection.is_single() {
            return Ok(selection.clone());
        }

        let earliest = match selection.earliest() {
            Some(week) => week.to_string(),
            None => return Ok(selection.clone()),
        };

        match self.store.preceding_week(&earliest).await? {
            Some(previous) => Ok(selection.widened(previous)),
            None => Ok(selection.clone()),
        }
    }

    /// Fetch the base and comparison windows, concurrently when they
    /// differ.
    async fn weekly_windows(
        &self,
        cluster: Option<&str>,
        selection: &WeekSelection,
    ) -> Result<Windows> {
        let delta_selection = self.comparison_weeks(selection).await?;
        let base_weeks = selection.to_vec();

        if delta_selection == *selection {
            let rows = self.fetch_weekly(cluster, &base_weeks).await?;
            return Ok(Windows {
                delta: rows.clone(),
                base: rows,
            });
        }

        let delta_weeks = delta_selection.to_vec();
        let (base, delta) = tokio::join!(
            self.fetch_weekly(cluster, &base_weeks),
            self.fetch_weekly(cluster, &delta_weeks),
        );

        Ok(Windows {
            base: base?,
            delta: delta?,
        })
    }

    async fn fetch_weekly(
        &self,
        cluster: Option<&str>,
        weeks: &[String],
    ) -> Result<Vec<WeeklyRow>> {
        let rows = match cluster {
            Some(cluster_id) => self.store.cluster_weekly(cluster_id, weeks).await?,
            None => self.store.site_weekly(weeks).await?,
        };
        Ok(rows)
    }
}

/// Only finite values from a real comparison become table companions.
fn companion(has_previous: bool, change: f64) -> Option<f64> {
    (has_previous && change.is_finite()).then_some(change)
}

/// Collapse rows into one aggregated point per week bucket, oldest first.
fn weekly_points(rows: &[WeeklyRow]) -> Vec<WeeklyPoint> {
    let buckets: BTreeSet<String> = rows
        .iter()
        .filter_map(|row| row.week_ending.clone())
        .collect();

    buckets
        .into_iter()
        .map(|week| {
            let filter: BTreeSet<String> = [week.clone()].into();
            let values = aggregate(rows, Some(&filter));
            WeeklyPoint {
                week_ending: week,
                impressions: values.impressions,
                clicks: values.clicks,
                conversions: values.conversions,
                ctr: values.ctr,
                position: values.position,
            }
        })
        .collect()
}
