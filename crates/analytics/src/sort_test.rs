//! Tests for sort-value resolution

use serde_json::{json, Map, Value};

use crate::sort::{delta_field_for, resolve_sort_value};

fn row(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("row fixtures are objects"),
    }
}

#[test]
fn mapping_table_overrides_and_default_rule() {
    assert_eq!(delta_field_for("clicks"), "clicks_delta_pct");
    assert_eq!(delta_field_for("impressions"), "impressions_delta_pct");
    assert_eq!(delta_field_for("conversions"), "conversions_delta_pct");
    assert_eq!(delta_field_for("position"), "position_delta");
    assert_eq!(delta_field_for("position_average"), "position_delta");
    assert_eq!(delta_field_for("ctr_average"), "ctr_delta");
    // unlisted fields follow the suffix rule
    assert_eq!(delta_field_for("sessions"), "sessions_delta_pct");
}

#[test]
fn absolute_mode_reads_the_raw_field() {
    let row = row(json!({"clicks": 42, "name": "page"}));
    assert_eq!(resolve_sort_value(&row, "clicks", false), 42.0);
}

#[test]
fn absolute_mode_coerces_missing_and_non_numeric_to_zero() {
    let row = row(json!({"name": "page"}));
    assert_eq!(resolve_sort_value(&row, "clicks", false), 0.0);
    assert_eq!(resolve_sort_value(&row, "name", false), 0.0);
}

#[test]
fn delta_mode_prefers_the_companion_field() {
    let row = row(json!({"clicks": 42, "clicks_delta_pct": -0.125}));
    assert_eq!(resolve_sort_value(&row, "clicks", true), -0.125);
}

#[test]
fn delta_mode_falls_back_to_the_raw_field() {
    let row = row(json!({"clicks": 42}));
    assert_eq!(resolve_sort_value(&row, "clicks", true), 42.0);
}

#[test]
fn position_sorts_by_its_absolute_companion() {
    let row = row(json!({"position_average": 8.4, "position_delta": 1.5}));
    assert_eq!(resolve_sort_value(&row, "position_average", true), 1.5);
}

#[test]
fn ctr_uses_a_precomputed_delta_when_present() {
    let row = row(json!({"ctr_average": 0.06, "ctr_delta": 2.0}));
    assert_eq!(resolve_sort_value(&row, "ctr_average", true), 2.0);
}

#[test]
fn ctr_reconstructs_the_previous_rate_from_companions() {
    // current 1000/50 (5%), previous 800/32 (4%) -> +1 point
    let row = row(json!({
        "ctr_average": 0.05,
        "impressions": 1000,
        "clicks": 50,
        "impressions_delta_pct": 0.25,
        "clicks_delta_pct": 0.5625,
    }));

    let value = resolve_sort_value(&row, "ctr_average", true);
    assert!((value - 1.0).abs() < 1e-9);
}

#[test]
fn ctr_without_companions_degrades_to_no_change() {
    // the reconstructed baseline equals the current rate
    let row = row(json!({"ctr_average": 0.05, "impressions": 1000, "clicks": 50}));
    let value = resolve_sort_value(&row, "ctr_average", true);
    assert!(value.abs() < 1e-9);
}

#[test]
fn ctr_on_a_zero_impression_row_stays_finite() {
    let row = row(json!({
        "ctr_average": 0.0,
        "impressions": 0,
        "clicks": 0,
        "impressions_delta_pct": -1.0,
    }));
    assert_eq!(resolve_sort_value(&row, "ctr_average", true), 0.0);
}
