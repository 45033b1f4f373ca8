use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::ReadingStore;
use crate::reading::{HazardReading, HazardType};

/// Readings table name on the hosted store.
const TABLE: &str = "hazard_readings";

/// HTTP client for a hosted PostgREST-style readings table.
///
/// Authentication follows the usual convention for these services: the
/// project API key is sent both as an `apikey` header and as a bearer token.
pub struct RestStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Builds a store from `HAZMAP_STORE_URL` / `HAZMAP_STORE_KEY`.
    /// Returns `None` when either is unset.
    pub fn from_env() -> Result<Option<Self>> {
        match (
            std::env::var("HAZMAP_STORE_URL"),
            std::env::var("HAZMAP_STORE_KEY"),
        ) {
            (Ok(url), Ok(key)) => Ok(Some(Self::new(url, key)?)),
            _ => Ok(None),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

#[async_trait]
impl ReadingStore for RestStore {
    async fn insert_many(&self, readings: &[HazardReading]) -> Result<()> {
        if readings.is_empty() {
            return Ok(());
        }

        let response = self
            .authed(self.client.post(self.table_url()))
            .json(readings)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send insert: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Insert failed with status {}: {}", status, body));
        }

        Ok(())
    }

    async fn select_by_type(&self, hazard_type: HazardType) -> Result<Vec<HazardReading>> {
        let url = format!(
            "{}?hazard_type=eq.{}&select=*",
            self.table_url(),
            hazard_type.as_str()
        );

        let response = self
            .authed(self.client.get(&url))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send select: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Select failed with status {}: {}", status, body));
        }

        let readings = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse select response: {}", e))?;

        Ok(readings)
    }

    async fn delete_by_type(&self, hazard_type: HazardType) -> Result<usize> {
        let url = format!("{}?hazard_type=eq.{}", self.table_url(), hazard_type.as_str());

        let response = self
            .authed(self.client.delete(&url))
            // Ask the store to echo deleted rows so the count is observable.
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send delete: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Delete failed with status {}: {}", status, body));
        }

        let removed: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse delete response: {}", e))?;

        Ok(removed.len())
    }
}
