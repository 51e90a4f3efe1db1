//! Table sort-value resolution
//!
//! Tables order rows either by a raw metric or by its delta companion.
//! Rows arrive as backend-agnostic JSON objects, so the resolver works
//! over field names with a fixed base-field to delta-field mapping.

use serde_json::{Map, Value};

use crate::delta::{ctr_points_change, previous_ctr};

/// Delta companion field for a base field.
///
/// Ratio fields map to a `_delta_pct` companion (also the rule for any
/// unlisted field); position-like fields map to an absolute `_delta`
/// companion; CTR's companion holds percentage points.
pub fn delta_field_for(field: &str) -> String {
    match field {
        "position" | "position_average" => "position_delta".to_string(),
        "ctr_average" => "ctr_delta".to_string(),
        _ => format!("{}_delta_pct", field),
    }
}

/// Resolve the numeric value a table should sort a row by.
///
/// Coercion policy: absent fields, non-numeric values, and non-finite
/// deltas all resolve to `0.0`, in both modes, so the resulting order is
/// total and stable.
///
/// In delta mode the mapped companion field wins when present; CTR is
/// special-cased: a precomputed `ctr_delta` is used as-is, otherwise the
/// previous CTR is reconstructed from the row's own impressions/clicks
/// delta companions and the change is computed in percentage points.
pub fn resolve_sort_value(row: &Map<String, Value>, field: &str, delta_mode: bool) -> f64 {
    if !delta_mode {
        return numeric(row.get(field));
    }

    if field == "ctr_average" {
        if let Some(delta) = finite(row.get("ctr_delta")) {
            return delta;
        }

        let ctr = numeric(row.get("ctr_average"));
        let prev = previous_ctr(
            numeric(row.get("impressions")),
            numeric(row.get("clicks")),
            as_f64(row.get("impressions_delta_pct")),
            as_f64(row.get("clicks_delta_pct")),
        );
        let change = ctr_points_change(Some(ctr), Some(prev));
        return if change.is_finite() { change } else { 0.0 };
    }

    match finite(row.get(&delta_field_for(field))) {
        Some(delta) => delta,
        None => numeric(row.get(field)),
    }
}

fn as_f64(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

fn finite(value: Option<&Value>) -> Option<f64> {
    as_f64(value).filter(|v| v.is_finite())
}

fn numeric(value: Option<&Value>) -> f64 {
    finite(value).unwrap_or(0.0)
}
