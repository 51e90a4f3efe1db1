//! Weighted metric aggregation
//!
//! Reduces weekly rows into summed counts plus impression-weighted
//! averages for CTR and search position.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use farol_store::WeeklyRow;

/// An aggregate over a set of weekly rows.
///
/// Counts are sums; `ctr` and `position` are impression-weighted averages
/// and are 0 when the window had no impressions. Fields are `f64` because
/// the reconciled previous-period baseline is generally fractional even
/// though real window sums are integral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    /// Total search impressions
    pub impressions: f64,
    /// Total search clicks
    pub clicks: f64,
    /// Total attributed conversions
    pub conversions: f64,
    /// Impression-weighted click-through rate (decimal fraction)
    pub ctr: f64,
    /// Impression-weighted average search position (lower is better)
    pub position: f64,
}

/// Aggregate rows into a [`MetricValues`], optionally restricted to the
/// given week buckets.
///
/// Rows without a week key are skipped when a filter is supplied. Missing
/// numeric fields count as 0 toward the sums, and a bucket with no
/// impressions contributes no weight to the averages. The result depends
/// only on the multiset of rows, not their order.
pub fn aggregate(rows: &[WeeklyRow], week_filter: Option<&BTreeSet<String>>) -> MetricValues {
    let mut impressions = 0.0;
    let mut clicks = 0.0;
    let mut conversions = 0.0;
    let mut position_weighted = 0.0;

    for row in rows {
        if let Some(filter) = week_filter {
            match &row.week_ending {
                Some(week) if filter.contains(week) => {}
                _ => continue,
            }
        }

        let row_impressions = row.impressions.unwrap_or(0) as f64;
        impressions += row_impressions;
        clicks += row.clicks.unwrap_or(0) as f64;
        conversions += row.conversions.unwrap_or(0) as f64;
        position_weighted += row.position.unwrap_or(0.0) * row_impressions;
    }

    let (ctr, position) = if impressions > 0.0 {
        (clicks / impressions, position_weighted / impressions)
    } else {
        (0.0, 0.0)
    };

    MetricValues {
        impressions,
        clicks,
        conversions,
        ctr,
        position,
    }
}
