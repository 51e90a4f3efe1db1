//! Metrics store trait and implementations

pub mod memory;
pub mod postgrest;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::rows::{UrlWeeklyRow, WeeklyRow};

/// Data-access contract for weekly metrics.
///
/// Implemented by the PostgREST and memory backends. `weeks` parameters
/// are distinct ISO week-ending keys; backends return every row whose
/// bucket is in the set, in no guaranteed order.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Site-wide rows (across all clusters) for the given weeks.
    async fn site_weekly(&self, weeks: &[String]) -> Result<Vec<WeeklyRow>, StoreError>;

    /// Rows for one content cluster.
    async fn cluster_weekly(
        &self,
        cluster_id: &str,
        weeks: &[String],
    ) -> Result<Vec<WeeklyRow>, StoreError>;

    /// Per-URL rows for one content cluster.
    async fn url_weekly(
        &self,
        cluster_id: &str,
        weeks: &[String],
    ) -> Result<Vec<UrlWeeklyRow>, StoreError>;

    /// Known week buckets, newest first.
    async fn list_weeks(&self, limit: usize) -> Result<Vec<String>, StoreError>;

    /// The bucket immediately before `before`, if any.
    async fn preceding_week(&self, before: &str) -> Result<Option<String>, StoreError>;

    /// Check the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}
