//! Typed access to one named collection of a data store.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::traits::store::{DataStore, Record};
use showroom_core::types::filter::Filter;

/// Primary key column of every collection.
pub const ID_COLUMN: &str = "uuid";

/// A data store bound to one collection name.
///
/// Every gateway failure passes through here and is logged with the
/// collection and operation before it propagates.
#[derive(Clone)]
pub struct Collection {
    store: Arc<dyn DataStore>,
    name: String,
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection").field("name", &self.name).finish()
    }
}

impl Collection {
    /// Bind `store` to the collection `name`.
    pub fn new(store: Arc<dyn DataStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    fn failed(&self, operation: &'static str, err: AppError) -> AppError {
        error!(
            collection = %self.name,
            operation,
            kind = %err.kind,
            error = %err.message,
            "Data store call failed"
        );
        err
    }

    /// Rows matching `filter`, decoded.
    pub async fn query<T: DeserializeOwned>(&self, filter: &Filter) -> AppResult<Vec<T>> {
        let rows = self
            .store
            .query(&self.name, filter)
            .await
            .map_err(|e| self.failed("query", e))?;
        rows.into_iter().map(|r| self.decode(r)).collect()
    }

    /// First row matching `filter`, if any.
    pub async fn first<T: DeserializeOwned>(&self, filter: &Filter) -> AppResult<Option<T>> {
        Ok(self.query(filter).await?.into_iter().next())
    }

    /// Insert an already complete record.
    pub async fn insert<T: DeserializeOwned>(&self, record: Record) -> AppResult<T> {
        let row = self
            .store
            .insert(&self.name, record)
            .await
            .map_err(|e| self.failed("insert", e))?;
        self.decode(row)
    }

    /// Apply `patch` to rows matching `filter`.
    pub async fn update<T: DeserializeOwned>(
        &self,
        filter: &Filter,
        patch: Record,
    ) -> AppResult<Vec<T>> {
        let rows = self
            .store
            .update(&self.name, filter, patch)
            .await
            .map_err(|e| self.failed("update", e))?;
        rows.into_iter().map(|r| self.decode(r)).collect()
    }

    /// Delete rows matching `filter`, returning them.
    pub async fn delete<T: DeserializeOwned>(&self, filter: &Filter) -> AppResult<Vec<T>> {
        let rows = self
            .store
            .delete(&self.name, filter)
            .await
            .map_err(|e| self.failed("delete", e))?;
        rows.into_iter().map(|r| self.decode(r)).collect()
    }

    /// Exact count of rows matching `filter`.
    pub async fn count(&self, filter: &Filter) -> AppResult<u64> {
        self.store
            .count(&self.name, filter)
            .await
            .map_err(|e| self.failed("count", e))
    }

    fn decode<T: DeserializeOwned>(&self, row: Record) -> AppResult<T> {
        serde_json::from_value(Value::Object(row)).map_err(|e| self.failed("decode", e.into()))
    }
}

/// Serialize a payload into a record.
pub fn to_record<T: Serialize>(value: &T) -> AppResult<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::internal(format!(
            "Expected an object payload, got {other}"
        ))),
    }
}

/// Serialize a creation payload and stamp a fresh identity plus the given
/// timestamp columns with the current time.
pub fn new_record<T: Serialize>(
    value: &T,
    id: impl Into<Value>,
    timestamp_columns: &[&str],
) -> AppResult<Record> {
    let mut record = to_record(value)?;
    record.insert(ID_COLUMN.to_string(), id.into());
    let now = serde_json::to_value(Utc::now())?;
    for column in timestamp_columns {
        record.insert((*column).to_string(), now.clone());
    }
    Ok(record)
}
