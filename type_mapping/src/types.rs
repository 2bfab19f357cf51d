//! Storage scalar definitions
//!
//! This module provides the value a persistence layer hands to, and receives
//! from, the database for a single column.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single column value as exchanged with the database driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DbValue {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Json(serde_json::Value),
}

impl DbValue {
    /// Variant name, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            DbValue::Null => "null",
            DbValue::Text(_) => "text",
            DbValue::Bytes(_) => "bytes",
            DbValue::Integer(_) => "integer",
            DbValue::Float(_) => "float",
            DbValue::Boolean(_) => "boolean",
            DbValue::Uuid(_) => "uuid",
            DbValue::Timestamp(_) => "timestamp",
            DbValue::Json(_) => "json",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DbValue::Null)
    }

    /// Borrow the raw text bytes of a textual value
    ///
    /// Returns `None` for every variant that does not carry text.
    pub fn as_text_bytes(&self) -> Option<&[u8]> {
        match self {
            DbValue::Text(s) => Some(s.as_bytes()),
            DbValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<String> for DbValue {
    fn from(val: String) -> Self {
        DbValue::Text(val)
    }
}

impl From<&str> for DbValue {
    fn from(val: &str) -> Self {
        DbValue::Text(val.to_string())
    }
}

impl From<Vec<u8>> for DbValue {
    fn from(val: Vec<u8>) -> Self {
        DbValue::Bytes(val)
    }
}

impl From<&[u8]> for DbValue {
    fn from(val: &[u8]) -> Self {
        DbValue::Bytes(val.to_vec())
    }
}

impl From<i64> for DbValue {
    fn from(val: i64) -> Self {
        DbValue::Integer(val)
    }
}

impl From<i32> for DbValue {
    fn from(val: i32) -> Self {
        DbValue::Integer(val as i64)
    }
}

impl From<f64> for DbValue {
    fn from(val: f64) -> Self {
        DbValue::Float(val)
    }
}

impl From<bool> for DbValue {
    fn from(val: bool) -> Self {
        DbValue::Boolean(val)
    }
}

impl From<Uuid> for DbValue {
    fn from(val: Uuid) -> Self {
        DbValue::Uuid(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DbValue {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        DbValue::Timestamp(val)
    }
}

impl From<serde_json::Value> for DbValue {
    fn from(val: serde_json::Value) -> Self {
        DbValue::Json(val)
    }
}

impl<T> From<Option<T>> for DbValue
where
    T: Into<DbValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => DbValue::Null,
        }
    }
}
