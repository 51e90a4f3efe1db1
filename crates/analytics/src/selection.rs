//! Week selection parsing
//!
//! The dashboard filters by explicit weekly buckets (ISO `YYYY-MM-DD`
//! week-ending dates) rather than a continuous time range, so a selection
//! is an ordered set of validated week keys.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{AnalyticsError, Result};

/// An ordered, de-duplicated set of selected week buckets.
///
/// Keys are ISO dates, so lexicographic order equals chronological order.
/// A selection is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSelection {
    weeks: BTreeSet<String>,
}

impl WeekSelection {
    /// Build a selection from week keys, validating each one.
    pub fn new<I, S>(weeks: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for week in weeks {
            let week = week.into();
            validate_week(&week)?;
            set.insert(week);
        }

        if set.is_empty() {
            return Err(AnalyticsError::EmptySelection);
        }
        Ok(Self { weeks: set })
    }

    /// Parse a comma-separated week list, e.g. `2025-06-01,2025-06-08`.
    pub fn parse(s: &str) -> Result<Self> {
        Self::new(s.split(',').map(str::trim).filter(|week| !week.is_empty()))
    }

    /// Week keys in chronological order.
    pub fn weeks(&self) -> impl Iterator<Item = &str> {
        self.weeks.iter().map(String::as_str)
    }

    /// Week keys as an owned list (the store query parameter shape).
    pub fn to_vec(&self) -> Vec<String> {
        self.weeks.iter().cloned().collect()
    }

    /// Number of selected buckets.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Always false; kept for the conventional `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Whether only a single bucket is selected, which means a comparison
    /// needs a widened window.
    pub fn is_single(&self) -> bool {
        self.weeks.len() == 1
    }

    /// Earliest selected bucket.
    pub fn earliest(&self) -> Option<&str> {
        self.weeks.iter().next().map(String::as_str)
    }

    /// Whether the selection contains a bucket.
    pub fn contains(&self, week: &str) -> bool {
        self.weeks.contains(week)
    }

    /// Selection with one extra preceding bucket, for comparison windows.
    pub fn widened(&self, preceding: impl Into<String>) -> Self {
        let mut weeks = self.weeks.clone();
        weeks.insert(preceding.into());
        Self { weeks }
    }
}

fn validate_week(week: &str) -> Result<()> {
    NaiveDate::parse_from_str(week, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| AnalyticsError::InvalidWeek(week.to_string()))
}
