//! In-memory backend for tests and local development
//!
//! Holds fixture rows and answers the same queries as the hosted backend.


use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::backend::MetricsStore;
use crate::error::StoreError;
use crate::rows::{UrlWeeklyRow, WeeklyRow};

/// Fixture-backed store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cluster_rows: Vec<(String, WeeklyRow)>,
    url_rows: Vec<(String, UrlWeeklyRow)>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weekly row for a cluster
    pub fn with_cluster_row(mut self, cluster_id: impl Into<String>, row: WeeklyRow) -> Self {
        self.cluster_rows.push((cluster_id.into(), row));
        self
    }

    /// Add a per-URL weekly row for a cluster
    pub fn with_url_row(mut self, cluster_id: impl Into<String>, row: UrlWeeklyRow) -> Self {
        self.url_rows.push((cluster_id.into(), row));
        self
    }

    fn all_weeks(&self) -> BTreeSet<String> {
        self.cluster_rows
            .iter()
            .filter_map(|(_, row)| row.week_ending.clone())
            .chain(
                self.url_rows
                    .iter()
                    .filter_map(|(_, row)| row.metrics.week_ending.clone()),
            )
            .collect()
    }
}

fn in_weeks(row: &WeeklyRow, weeks: &[String]) -> bool {
    row.week_ending
        .as_deref()
        .is_some_and(|week| weeks.iter().any(|w| w == week))
}

#[async_trait]
impl MetricsStore for MemoryStore {
    async fn site_weekly(&self, weeks: &[String]) -> Result<Vec<WeeklyRow>, StoreError> {
        Ok(self
            .cluster_rows
            .iter()
            .filter(|(_, row)| in_weeks(row, weeks))
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn cluster_weekly(
        &self,
        cluster_id: &str,
        weeks: &[String],
    ) -> Result<Vec<WeeklyRow>, StoreError> {
        Ok(self
            .cluster_rows
            .iter()
            .filter(|(cluster, row)| cluster == cluster_id && in_weeks(row, weeks))
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn url_weekly(
        &self,
        cluster_id: &str,
        weeks: &[String],
    ) -> Result<Vec<UrlWeeklyRow>, StoreError> {
        Ok(self
            .url_rows
            .iter()
            .filter(|(cluster, row)| cluster == cluster_id && in_weeks(&row.metrics, weeks))
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn list_weeks(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        Ok(self.all_weeks().into_iter().rev().take(limit).collect())
    }

    async fn preceding_week(&self, before: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .all_weeks()
            .into_iter()
            .filter(|week| week.as_str() < before)
            .next_back())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
