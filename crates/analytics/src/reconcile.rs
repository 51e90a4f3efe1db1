//! Delta reconciliation
//!
//! Builds the `{totals, previous_period}` pair the whole dashboard hangs
//! off. Totals describe the buckets the user selected; the comparison may
//! run over a wider window (the selection plus one preceding bucket when
//! a single week is selected), so the baseline is solved backwards from
//! the early/late ratio of the comparison window. Applying
//! [`percentage_change`] to `(totals, previous_period)` then reproduces
//! that ratio while the displayed value stays the real selected-window
//! total.
//!
//! [`percentage_change`]: crate::delta::percentage_change

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use farol_store::WeeklyRow;

use crate::aggregate::{aggregate, MetricValues};
use crate::periods::split_periods;

/// Metric totals with an optional reconciled previous-period baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsWithDelta {
    /// Totals for the selected window
    #[serde(flatten)]
    pub totals: MetricValues,

    /// Baseline such that the standard change formulas reproduce the
    /// early-to-late ratio of the comparison window. Absent when that
    /// window had fewer than two buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_period: Option<MetricValues>,
}

impl MetricsWithDelta {
    /// Totals without a baseline (no comparison possible).
    pub fn without_previous(totals: MetricValues) -> Self {
        Self {
            totals,
            previous_period: None,
        }
    }
}

/// Reconcile selected-window totals with a comparison-window baseline.
///
/// `base_rows` cover exactly the selected buckets; `delta_rows` cover the
/// comparison window, which is the same set except when the data layer
/// widened it by one preceding bucket to make a single-week comparison
/// possible.
pub fn reconcile(base_rows: &[WeeklyRow], delta_rows: &[WeeklyRow]) -> MetricsWithDelta {
    let totals = aggregate(base_rows, None);

    let buckets: BTreeSet<String> = delta_rows
        .iter()
        .filter_map(|row| row.week_ending.clone())
        .collect();
    if buckets.len() < 2 {
        return MetricsWithDelta::without_previous(totals);
    }

    let split = split_periods(&buckets);
    let early = aggregate(delta_rows, Some(&split.early));
    let late = aggregate(delta_rows, Some(&split.late));

    // The intended delta per additive field is (late - early) / early, but
    // the displayed value is the selected-window total. Solving
    // (totals - x) / x = (late - early) / early gives
    // x = totals * early / late. A late total of 0 would divide by zero;
    // the raw early total stands in as the baseline there.
    let previous = MetricValues {
        impressions: rescale(totals.impressions, early.impressions, late.impressions),
        clicks: rescale(totals.clicks, early.clicks, late.clicks),
        conversions: rescale(totals.conversions, early.conversions, late.conversions),
        // Weighted averages are not rescaled: the early-window value is
        // already a comparable rate.
        ctr: early.ctr,
        position: early.position,
    };

    MetricsWithDelta {
        totals,
        previous_period: Some(previous),
    }
}

fn rescale(total: f64, early: f64, late: f64) -> f64 {
    if late > 0.0 {
        total * early / late
    } else {
        early
    }
}
