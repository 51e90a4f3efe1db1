//! Weekly metric row shapes
//!
//! Backend-agnostic rows as returned by every [`MetricsStore`] backend.
//!
//! [`MetricsStore`]: crate::backend::MetricsStore

use serde::{Deserialize, Serialize};

/// One weekly observation for one entity (a content cluster, a URL, or
/// the whole site, depending on the query).
///
/// Every field is optional: the hosted backend returns `null` for weeks a
/// collector skipped, and the calculation layer decides how absent values
/// count. A stored `ctr` is carried through for completeness but
/// aggregation always recomputes the rate from clicks and impressions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRow {
    /// Week bucket key (ISO week-ending date, `YYYY-MM-DD`)
    pub week_ending: Option<String>,
    /// Search impressions for the week
    pub impressions: Option<u64>,
    /// Search clicks for the week
    pub clicks: Option<u64>,
    /// Attributed conversions for the week
    pub conversions: Option<u64>,
    /// Average search position (lower is better)
    pub position: Option<f64>,
    /// Stored click-through rate, if the backend materializes one
    pub ctr: Option<f64>,
}

impl WeeklyRow {
    /// Row with only the week key set.
    pub fn new(week_ending: impl Into<String>) -> Self {
        Self {
            week_ending: Some(week_ending.into()),
            ..Self::default()
        }
    }

    /// Set the impression count.
    pub fn with_impressions(mut self, impressions: u64) -> Self {
        self.impressions = Some(impressions);
        self
    }

    /// Set the click count.
    pub fn with_clicks(mut self, clicks: u64) -> Self {
        self.clicks = Some(clicks);
        self
    }

    /// Set the conversion count.
    pub fn with_conversions(mut self, conversions: u64) -> Self {
        self.conversions = Some(conversions);
        self
    }

    /// Set the average position.
    pub fn with_position(mut self, position: f64) -> Self {
        self.position = Some(position);
        self
    }
}

/// One weekly observation for a single URL inside a content cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlWeeklyRow {
    /// Canonical page URL
    pub url: String,
    /// Page title, when known
    pub name: Option<String>,
    /// The week's metrics
    #[serde(flatten)]
    pub metrics: WeeklyRow,
}
