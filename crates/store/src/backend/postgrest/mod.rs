//! PostgREST backend for the hosted metrics database
//!
//! Reads weekly metric rows over the PostgREST HTTP interface exposed by
//! the hosted relational backend.

#[cfg(test)]
mod postgrest_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::backend::MetricsStore;
use crate::config::PostgrestConfig;
use crate::error::StoreError;
use crate::rows::{UrlWeeklyRow, WeeklyRow};

// Hosted tables. `reporting_weeks` is a view over the distinct
// `week_ending` values of the metric tables.
const TABLE_CLUSTER_WEEKLY: &str = "cluster_weekly_metrics";
const TABLE_URL_WEEKLY: &str = "url_weekly_metrics";
const TABLE_WEEKS: &str = "reporting_weeks";

const SELECT_METRICS: &str = "week_ending,impressions,clicks,conversions,position,ctr";
const SELECT_URL_METRICS: &str = "url,name,week_ending,impressions,clicks,conversions,position,ctr";

#[derive(Debug, Deserialize)]
struct WeekRow {
    week_ending: String,
}

/// PostgREST backend
#[derive(Clone)]
pub struct PostgrestBackend {
    client: reqwest::Client,
    config: PostgrestConfig,
}

impl std::fmt::Debug for PostgrestBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgrestBackend")
            .field("url", &self.config.url)
            .field("schema", &self.config.schema)
            .finish()
    }
}

impl PostgrestBackend {
    /// Create a new PostgREST backend from config
    pub fn new(config: &PostgrestConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build a REST URL for a table with query-string filters
    fn build_url(&self, table: &str, filters: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            table
        );

        let mut sep = '?';
        for (key, value) in filters {
            url.push(sep);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            sep = '&';
        }

        url
    }

    /// `in.(...)` filter for a week list
    fn weeks_filter(weeks: &[String]) -> String {
        format!("in.({})", weeks.join(","))
    }

    /// Execute a GET against a table and decode the JSON rows
    async fn fetch<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let url = self.build_url(table, filters);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Accept-Profile", &self.config.schema)
            .send()
            .await
            .map_err(|e| StoreError::Connection(format!("PostgREST connection failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Request(format!(
                "PostgREST error ({}): {}",
                status, body
            )));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Decode(format!("failed to decode PostgREST response: {}", e)))
    }
}

#[async_trait]
impl MetricsStore for PostgrestBackend {
    async fn site_weekly(&self, weeks: &[String]) -> Result<Vec<WeeklyRow>, StoreError> {
        let rows: Vec<WeeklyRow> = self
            .fetch(
                TABLE_CLUSTER_WEEKLY,
                &[
                    ("select", SELECT_METRICS.to_string()),
                    ("week_ending", Self::weeks_filter(weeks)),
                    ("order", "week_ending.asc".to_string()),
                ],
            )
            .await?;

        tracing::debug!(rows = rows.len(), weeks = weeks.len(), "fetched site weekly rows");
        Ok(rows)
    }

    async fn cluster_weekly(
        &self,
        cluster_id: &str,
        weeks: &[String],
    ) -> Result<Vec<WeeklyRow>, StoreError> {
        let rows: Vec<WeeklyRow> = self
            .fetch(
                TABLE_CLUSTER_WEEKLY,
                &[
                    ("select", SELECT_METRICS.to_string()),
                    ("cluster_id", format!("eq.{}", cluster_id)),
                    ("week_ending", Self::weeks_filter(weeks)),
                    ("order", "week_ending.asc".to_string()),
                ],
            )
            .await?;

        tracing::debug!(
            rows = rows.len(),
            cluster = cluster_id,
            "fetched cluster weekly rows"
        );
        Ok(rows)
    }

    async fn url_weekly(
        &self,
        cluster_id: &str,
        weeks: &[String],
    ) -> Result<Vec<UrlWeeklyRow>, StoreError> {
        let rows: Vec<UrlWeeklyRow> = self
            .fetch(
                TABLE_URL_WEEKLY,
                &[
                    ("select", SELECT_URL_METRICS.to_string()),
                    ("cluster_id", format!("eq.{}", cluster_id)),
                    ("week_ending", Self::weeks_filter(weeks)),
                    ("order", "url.asc".to_string()),
                ],
            )
            .await?;

        tracing::debug!(
            rows = rows.len(),
            cluster = cluster_id,
            "fetched url weekly rows"
        );
        Ok(rows)
    }

    async fn list_weeks(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let rows: Vec<WeekRow> = self
            .fetch(
                TABLE_WEEKS,
                &[
                    ("select", "week_ending".to_string()),
                    ("order", "week_ending.desc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(rows.into_iter().map(|row| row.week_ending).collect())
    }

    async fn preceding_week(&self, before: &str) -> Result<Option<String>, StoreError> {
        let rows: Vec<WeekRow> = self
            .fetch(
                TABLE_WEEKS,
                &[
                    ("select", "week_ending".to_string()),
                    ("week_ending", format!("lt.{}", before)),
                    ("order", "week_ending.desc".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;

        Ok(rows.into_iter().next().map(|row| row.week_ending))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let _: Vec<WeekRow> = self
            .fetch(
                TABLE_WEEKS,
                &[
                    ("select", "week_ending".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "postgrest"
    }
}
