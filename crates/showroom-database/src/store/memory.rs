//! In-memory data store gateway using `dashmap`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use showroom_core::result::AppResult;
use showroom_core::traits::store::{DataStore, Record};
use showroom_core::types::filter::Filter;

/// Process-local data store. Rows of each collection keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Rows per collection name.
    collections: Arc<DashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn query(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Record>> {
        Ok(self
            .collections
            .get(collection)
            .map(|rows| rows.iter().filter(|r| filter.matches(r)).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(&self, collection: &str, record: Record) -> AppResult<Record> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Record,
    ) -> AppResult<Vec<Record>> {
        let Some(mut rows) = self.collections.get_mut(collection) else {
            return Ok(Vec::new());
        };

        let mut updated = Vec::new();
        for row in rows.iter_mut().filter(|r| filter.matches(r)) {
            for (key, value) in &patch {
                row.insert(key.clone(), value.clone());
            }
            updated.push(row.clone());
        }
        Ok(updated)
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Record>> {
        let Some(mut rows) = self.collections.get_mut(collection) else {
            return Ok(Vec::new());
        };

        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut *rows).into_iter().partition(|r| filter.matches(r));
        *rows = kept;

        debug!(collection, removed = removed.len(), "Deleted rows");
        Ok(removed)
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        Ok(self
            .collections
            .get(collection)
            .map(|rows| rows.iter().filter(|r| filter.matches(r)).count() as u64)
            .unwrap_or(0))
    }
}
