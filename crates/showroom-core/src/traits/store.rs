//! Data store gateway trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::filter::Filter;

/// A single row as exchanged with the data store.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Equality-filtered access to named record collections.
///
/// Implementations own their retry and timeout behavior; callers treat
/// every returned error as terminal for the current step.
#[async_trait]
pub trait DataStore: Send + Sync + 'static {
    /// Return every row of `collection` matching `filter`, in store order.
    async fn query(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Record>>;

    /// Insert `record` and return the row as stored.
    async fn insert(&self, collection: &str, record: Record) -> AppResult<Record>;

    /// Apply `patch` to every row matching `filter` and return the updated rows.
    async fn update(&self, collection: &str, filter: &Filter, patch: Record)
    -> AppResult<Vec<Record>>;

    /// Delete every row matching `filter` and return the deleted rows.
    async fn delete(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Record>>;

    /// Exact count of rows matching `filter`.
    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64>;
}
