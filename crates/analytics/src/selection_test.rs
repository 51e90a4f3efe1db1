//! Tests for week selection parsing

use crate::error::AnalyticsError;
use crate::selection::WeekSelection;

#[test]
fn parse_sorts_and_dedupes() {
    let selection = WeekSelection::parse("2025-06-08,2025-06-01,2025-06-08").unwrap();
    let weeks: Vec<&str> = selection.weeks().collect();
    assert_eq!(weeks, ["2025-06-01", "2025-06-08"]);
}

#[test]
fn parse_trims_whitespace() {
    let selection = WeekSelection::parse(" 2025-06-01 , 2025-06-08 ").unwrap();
    assert_eq!(selection.len(), 2);
}

#[test]
fn parse_rejects_malformed_dates() {
    assert!(matches!(
        WeekSelection::parse("2025-13-40"),
        Err(AnalyticsError::InvalidWeek(_))
    ));
    assert!(matches!(
        WeekSelection::parse("last-week"),
        Err(AnalyticsError::InvalidWeek(_))
    ));
    assert!(matches!(
        WeekSelection::parse("2025-06-01,nope"),
        Err(AnalyticsError::InvalidWeek(_))
    ));
}

#[test]
fn parse_rejects_empty_input() {
    assert!(matches!(
        WeekSelection::parse(""),
        Err(AnalyticsError::EmptySelection)
    ));
    assert!(matches!(
        WeekSelection::parse(" , "),
        Err(AnalyticsError::EmptySelection)
    ));
}

#[test]
fn single_week_selection() {
    let selection = WeekSelection::parse("2025-06-08").unwrap();
    assert!(selection.is_single());
    assert!(!selection.is_empty());
    assert_eq!(selection.earliest(), Some("2025-06-08"));
}

#[test]
fn widened_adds_the_preceding_bucket() {
    let selection = WeekSelection::parse("2025-06-08").unwrap();
    let widened = selection.widened("2025-06-01");

    assert_eq!(widened.len(), 2);
    assert!(widened.contains("2025-06-01"));
    assert_eq!(widened.earliest(), Some("2025-06-01"));
    // the original selection is untouched
    assert!(!selection.contains("2025-06-01"));
}
