//! Equality filters understood by every data store gateway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single `field = value` condition. A `null` value matches missing or
/// null fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The column or field name to filter on.
    pub field: String,
    /// The value the field must equal.
    pub value: Value,
}

impl FilterField {
    /// Create a new equality condition.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether a record satisfies this condition.
    pub fn matches(&self, record: &serde_json::Map<String, Value>) -> bool {
        match (record.get(&self.field), &self.value) {
            (None, Value::Null) => true,
            (None, _) => false,
            (Some(actual), expected) => actual == expected,
        }
    }
}

/// A conjunction of equality conditions. An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Conditions, all of which must hold.
    pub fields: Vec<FilterField>,
}

impl Filter {
    /// Filter matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter on a single field.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    /// Add another equality condition.
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(FilterField::new(field, value));
        self
    }

    /// Whether a record satisfies every condition.
    pub fn matches(&self, record: &serde_json::Map<String, Value>) -> bool {
        self.fields.iter().all(|f| f.matches(record))
    }

    /// Whether this filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
