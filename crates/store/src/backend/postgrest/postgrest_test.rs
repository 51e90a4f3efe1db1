//! Tests for PostgREST URL construction

use super::PostgrestBackend;
use crate::config::PostgrestConfig;

fn backend() -> PostgrestBackend {
    PostgrestBackend::new(&PostgrestConfig::new("https://db.example.co", "anon")).unwrap()
}

#[test]
fn build_url_encodes_filter_values() {
    let url = backend().build_url(
        "cluster_weekly_metrics",
        &[
            ("select", "week_ending,impressions".to_string()),
            ("cluster_id", "eq.guias".to_string()),
        ],
    );

    assert_eq!(
        url,
        "https://db.example.co/rest/v1/cluster_weekly_metrics\
         ?select=week_ending%2Cimpressions&cluster_id=eq.guias"
    );
}

#[test]
fn build_url_trims_trailing_slash() {
    let backend =
        PostgrestBackend::new(&PostgrestConfig::new("https://db.example.co/", "anon")).unwrap();
    let url = backend.build_url("reporting_weeks", &[("limit", "1".to_string())]);
    assert_eq!(url, "https://db.example.co/rest/v1/reporting_weeks?limit=1");
}

#[test]
fn weeks_filter_builds_an_in_list() {
    let weeks = vec!["2025-06-01".to_string(), "2025-06-08".to_string()];
    assert_eq!(
        PostgrestBackend::weeks_filter(&weeks),
        "in.(2025-06-01,2025-06-08)"
    );
}

#[test]
fn config_defaults() {
    let config = PostgrestConfig::new("https://db.example.co", "anon");
    assert_eq!(config.schema, "public");
    assert_eq!(config.timeout_secs, 10);

    let config = config.with_schema("metrics").with_timeout_secs(30);
    assert_eq!(config.schema, "metrics");
    assert_eq!(config.timeout_secs, 30);
}
