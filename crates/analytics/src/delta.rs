//! Delta calculation primitives
//!
//! Pure functions for period-over-period metric changes. Every delta the
//! dashboard displays - summary cards, table companions, chart
//! annotations - comes from these functions applied to a
//! `(current, previous)` pair, so all consumers agree on the same number
//! for the same inputs.

use serde::{Deserialize, Serialize};

use crate::aggregate::MetricValues;

/// Percentage change between two values, as a decimal ratio.
///
/// A zero previous value with a positive current value yields
/// `f64::INFINITY`, marking growth from a zero baseline ("new") instead
/// of masking it as zero. An absent previous value yields 0.
pub fn percentage_change(current: f64, previous: Option<f64>) -> f64 {
    match previous {
        Some(prev) if prev == 0.0 => {
            if current > 0.0 {
                f64::INFINITY
            } else {
                0.0
            }
        }
        Some(prev) => (current - prev) / prev,
        None => 0.0,
    }
}

/// Position delta: `previous - current`, so moving up the rankings is
/// positive. Returns 0 when either side is missing or the baseline is 0.
pub fn position_delta(current: Option<f64>, previous: Option<f64>) -> f64 {
    match (current, previous) {
        (Some(cur), Some(prev)) if prev != 0.0 => prev - cur,
        _ => 0.0,
    }
}

/// CTR change in percentage points, not percent change: 2% to 3% is +1.0.
///
/// Both inputs are decimal fractions in `[0, 1]`; missing values default
/// to 0. Non-finite inputs propagate so callers can render a distinct
/// state instead of a silently wrong number.
pub fn ctr_points_change(current: Option<f64>, previous: Option<f64>) -> f64 {
    let cur = current.unwrap_or(0.0);
    let prev = previous.unwrap_or(0.0);
    cur * 100.0 - prev * 100.0
}

/// Invert [`percentage_change`]: reconstruct the previous value from the
/// current value and a known delta ratio.
///
/// A delta of -100% or lower would need a non-positive denominator, so it
/// resolves to 0 instead of a negative or infinite baseline.
pub fn previous_from_delta_pct(current: f64, delta_pct: f64) -> f64 {
    if delta_pct <= -1.0 {
        return 0.0;
    }
    current / (1.0 + delta_pct)
}

/// Reconstruct a previous-period CTR from current impressions/clicks and
/// their already-known delta ratios. Returns 0 when the reconstructed
/// impression baseline is 0.
pub fn previous_ctr(
    current_impressions: f64,
    current_clicks: f64,
    impressions_delta_pct: Option<f64>,
    clicks_delta_pct: Option<f64>,
) -> f64 {
    let prev_impressions =
        previous_from_delta_pct(current_impressions, impressions_delta_pct.unwrap_or(0.0));
    let prev_clicks = previous_from_delta_pct(current_clicks, clicks_delta_pct.unwrap_or(0.0));

    if prev_impressions > 0.0 {
        prev_clicks / prev_impressions
    } else {
        0.0
    }
}

/// All display deltas for one metric summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricDeltas {
    /// Impressions change as a decimal ratio
    pub impressions_change: f64,
    /// Clicks change as a decimal ratio
    pub clicks_change: f64,
    /// Conversions change as a decimal ratio
    pub conversions_change: f64,
    /// CTR change in percentage points
    pub ctr_change: f64,
    /// Position change in absolute ranks (positive is an improvement)
    pub position_change: f64,
}

impl MetricDeltas {
    /// Compute every delta between a current summary and an optional
    /// previous-period baseline.
    pub fn between(current: &MetricValues, previous: Option<&MetricValues>) -> Self {
        Self {
            impressions_change: percentage_change(
                current.impressions,
                previous.map(|p| p.impressions),
            ),
            clicks_change: percentage_change(current.clicks, previous.map(|p| p.clicks)),
            conversions_change: percentage_change(
                current.conversions,
                previous.map(|p| p.conversions),
            ),
            ctr_change: ctr_points_change(Some(current.ctr), previous.map(|p| p.ctr)),
            position_change: position_delta(Some(current.position), previous.map(|p| p.position)),
        }
    }
}
