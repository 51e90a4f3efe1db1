//! Tests for delta calculation primitives

use crate::aggregate::MetricValues;
use crate::delta::{
    ctr_points_change, percentage_change, position_delta, previous_ctr, previous_from_delta_pct,
    MetricDeltas,
};

#[test]
fn percentage_change_identity_is_zero() {
    assert_eq!(percentage_change(100.0, Some(100.0)), 0.0);
    assert_eq!(percentage_change(0.5, Some(0.5)), 0.0);
}

#[test]
fn percentage_change_growth_and_decline() {
    assert_eq!(percentage_change(150.0, Some(100.0)), 0.5);
    assert_eq!(percentage_change(80.0, Some(100.0)), -0.2);
}

#[test]
fn percentage_change_from_zero_baseline_signals_new() {
    assert_eq!(percentage_change(100.0, Some(0.0)), f64::INFINITY);
    assert_eq!(percentage_change(0.0, Some(0.0)), 0.0);
}

#[test]
fn percentage_change_missing_baseline_is_zero() {
    assert_eq!(percentage_change(100.0, None), 0.0);
}

#[test]
fn position_delta_improvement_is_positive() {
    assert_eq!(position_delta(Some(8.0), Some(12.0)), 4.0);
    assert_eq!(position_delta(Some(12.0), Some(8.0)), -4.0);
}

#[test]
fn position_delta_antisymmetry() {
    let (a, b) = (7.3, 15.6);
    assert_eq!(
        position_delta(Some(a), Some(b)),
        -position_delta(Some(b), Some(a))
    );
}

#[test]
fn position_delta_missing_or_zero_baseline_is_zero() {
    assert_eq!(position_delta(Some(5.0), Some(0.0)), 0.0);
    assert_eq!(position_delta(Some(5.0), None), 0.0);
    assert_eq!(position_delta(None, Some(5.0)), 0.0);
}

#[test]
fn ctr_points_change_is_in_points() {
    // 4% -> 6% is +2 points, not +0.02 and not +50%
    assert!((ctr_points_change(Some(0.06), Some(0.04)) - 2.0).abs() < 1e-9);
}

#[test]
fn ctr_points_change_missing_sides_default_to_zero() {
    assert!((ctr_points_change(Some(0.05), None) - 5.0).abs() < 1e-9);
    assert!((ctr_points_change(None, Some(0.05)) + 5.0).abs() < 1e-9);
    assert_eq!(ctr_points_change(None, None), 0.0);
}

#[test]
fn previous_from_delta_pct_inverts_percentage_change() {
    for (current, delta) in [(100.0, 0.25), (1000.0, -0.5), (42.0, 3.0), (7.0, -0.99)] {
        let previous = previous_from_delta_pct(current, delta);
        assert!(
            (percentage_change(current, Some(previous)) - delta).abs() < 1e-9,
            "round trip failed for current={} delta={}",
            current,
            delta
        );
    }
}

#[test]
fn previous_from_delta_pct_full_decline_resolves_to_zero() {
    assert_eq!(previous_from_delta_pct(100.0, -1.0), 0.0);
    assert_eq!(previous_from_delta_pct(100.0, -1.5), 0.0);
}

#[test]
fn previous_ctr_reconstructs_the_baseline_rate() {
    // current: 1000 impressions / 50 clicks; previous: 800 / 32
    let prev = previous_ctr(1000.0, 50.0, Some(0.25), Some(0.5625));
    assert!((prev - 0.04).abs() < 1e-9);
}

#[test]
fn previous_ctr_with_zero_previous_impressions_is_zero() {
    // a -100% impressions delta reconstructs a zero baseline
    assert_eq!(previous_ctr(1000.0, 50.0, Some(-1.0), Some(0.0)), 0.0);
}

#[test]
fn previous_ctr_missing_deltas_reproduce_the_current_rate() {
    let prev = previous_ctr(1000.0, 50.0, None, None);
    assert!((prev - 0.05).abs() < 1e-12);
}

#[test]
fn metric_deltas_between_covers_every_field() {
    let current = MetricValues {
        impressions: 1000.0,
        clicks: 50.0,
        conversions: 5.0,
        ctr: 0.05,
        position: 10.0,
    };
    let previous = MetricValues {
        impressions: 800.0,
        clicks: 32.0,
        conversions: 4.0,
        ctr: 0.04,
        position: 12.0,
    };

    let deltas = MetricDeltas::between(&current, Some(&previous));
    assert!((deltas.impressions_change - 0.25).abs() < 1e-12);
    assert!((deltas.clicks_change - 0.5625).abs() < 1e-12);
    assert!((deltas.conversions_change - 0.25).abs() < 1e-12);
    assert!((deltas.ctr_change - 1.0).abs() < 1e-9);
    assert!((deltas.position_change - 2.0).abs() < 1e-12);
}

#[test]
fn metric_deltas_without_baseline() {
    let current = MetricValues {
        impressions: 10.0,
        clicks: 1.0,
        conversions: 0.0,
        ctr: 0.1,
        position: 3.0,
    };

    let deltas = MetricDeltas::between(&current, None);
    assert_eq!(deltas.impressions_change, 0.0);
    assert_eq!(deltas.clicks_change, 0.0);
    assert_eq!(deltas.position_change, 0.0);
    // CTR with a missing baseline degrades to the current rate in points
    assert!((deltas.ctr_change - 10.0).abs() < 1e-9);
}
