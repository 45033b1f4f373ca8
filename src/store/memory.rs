use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ReadingStore;
use crate::reading::{HazardReading, HazardType};

/// Volatile store used by tests and dry runs. Contents are lost at exit.
#[derive(Default)]
pub struct InMemoryStore {
    rows: RwLock<Vec<HazardReading>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored readings across all types.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ReadingStore for InMemoryStore {
    async fn insert_many(&self, readings: &[HazardReading]) -> Result<()> {
        self.rows.write().await.extend_from_slice(readings);
        Ok(())
    }

    async fn select_by_type(&self, hazard_type: HazardType) -> Result<Vec<HazardReading>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.hazard_type == hazard_type)
            .cloned()
            .collect())
    }

    async fn delete_by_type(&self, hazard_type: HazardType) -> Result<usize> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.hazard_type != hazard_type);
        Ok(before - rows.len())
    }
}
