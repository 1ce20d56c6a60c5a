//! PostgreSQL data store gateway.
//!
//! Rows travel as JSON: reads go through `to_jsonb`, writes through
//! `jsonb_populate_record`, so one generic implementation serves every
//! collection. Collection and field names are validated and quoted before
//! they reach the SQL text; values are always bound parameters.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::debug;

use showroom_core::error::{AppError, ErrorKind};
use showroom_core::result::AppResult;
use showroom_core::traits::store::{DataStore, Record};
use showroom_core::types::filter::Filter;

/// Data store gateway backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new gateway over `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Validate and double-quote a SQL identifier.
fn quote_ident(name: &str) -> AppResult<String> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::invalid(format!("Invalid identifier '{name}'")));
    }
    Ok(format!("\"{name}\""))
}

/// Text form a filter value is compared against (`column::text = $n`).
fn filter_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build a ` WHERE ...` clause over alias `t`, numbering parameters from
/// `first_param`. Returns the clause and the values to bind in order.
fn where_clause(filter: &Filter, first_param: usize) -> AppResult<(String, Vec<String>)> {
    let mut conditions = Vec::with_capacity(filter.fields.len());
    let mut binds = Vec::new();

    for field in &filter.fields {
        let column = quote_ident(&field.field)?;
        if field.value.is_null() {
            conditions.push(format!("t.{column} IS NULL"));
        } else {
            binds.push(filter_text(&field.value));
            conditions.push(format!(
                "t.{column}::text = ${}",
                first_param + binds.len() - 1
            ));
        }
    }

    if conditions.is_empty() {
        Ok((String::new(), binds))
    } else {
        Ok((format!(" WHERE {}", conditions.join(" AND ")), binds))
    }
}

fn into_record(value: Value) -> AppResult<Record> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::new(
            ErrorKind::Serialization,
            format!("Expected a row object, got {other}"),
        )),
    }
}

fn store_error(operation: &str, collection: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(
        ErrorKind::UpstreamFailure,
        format!("Failed to {operation} {collection}: {err}"),
        err,
    )
}

#[async_trait]
impl DataStore for PgStore {
    async fn query(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Record>> {
        let table = quote_ident(collection)?;
        let (clause, binds) = where_clause(filter, 1)?;
        let sql = format!("SELECT to_jsonb(t.*) FROM {table} AS t{clause}");
        debug!(%sql, "store query");

        let mut query = sqlx::query_scalar::<_, Value>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("query", collection, e))?;
        rows.into_iter().map(into_record).collect()
    }

    async fn insert(&self, collection: &str, record: Record) -> AppResult<Record> {
        let table = quote_ident(collection)?;
        let sql = if record.is_empty() {
            format!("INSERT INTO {table} AS t DEFAULT VALUES RETURNING to_jsonb(t.*)")
        } else {
            let columns = record
                .keys()
                .map(|k| quote_ident(k))
                .collect::<AppResult<Vec<_>>>()?
                .join(", ");
            format!(
                "INSERT INTO {table} AS t ({columns}) \
                 SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1) \
                 RETURNING to_jsonb(t.*)"
            )
        };
        debug!(%sql, "store insert");

        let row = sqlx::query_scalar::<_, Value>(&sql)
            .bind(Value::Object(record))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("insert into", collection, e))?;
        into_record(row)
    }

    async fn update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Record,
    ) -> AppResult<Vec<Record>> {
        if patch.is_empty() {
            return Err(AppError::invalid("Update patch must name at least one field"));
        }
        let table = quote_ident(collection)?;
        let assignments = patch
            .keys()
            .map(|k| quote_ident(k).map(|c| format!("{c} = p.{c}")))
            .collect::<AppResult<Vec<_>>>()?
            .join(", ");
        let (clause, binds) = where_clause(filter, 2)?;
        let sql = format!(
            "UPDATE {table} AS t SET {assignments} \
             FROM jsonb_populate_record(NULL::{table}, $1) AS p{clause} \
             RETURNING to_jsonb(t.*)"
        );
        debug!(%sql, "store update");

        let mut query = sqlx::query_scalar::<_, Value>(&sql).bind(Value::Object(patch));
        for value in binds {
            query = query.bind(value);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("update", collection, e))?;
        rows.into_iter().map(into_record).collect()
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Record>> {
        let table = quote_ident(collection)?;
        let (clause, binds) = where_clause(filter, 1)?;
        let sql = format!("DELETE FROM {table} AS t{clause} RETURNING to_jsonb(t.*)");
        debug!(%sql, "store delete");

        let mut query = sqlx::query_scalar::<_, Value>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("delete from", collection, e))?;
        rows.into_iter().map(into_record).collect()
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let table = quote_ident(collection)?;
        let (clause, binds) = where_clause(filter, 1)?;
        let sql = format!("SELECT COUNT(*) FROM {table} AS t{clause}");

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let total = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("count", collection, e))?;
        Ok(total.max(0) as u64)
    }
}
