//! String list column type
//!
//! Stored as comma-joined text, exchanged over the API as a JSON array.

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;
use type_mapping::{json_storage_type, Dialect, DialectTarget, DbValue, SqlExpr};

use crate::errors::DataTypeError;
use crate::traits::{json_literal, ColumnType};

const DELIMITER: &str = ",";

/// Ordered list of strings
///
/// Elements must not contain `,`: the database form joins on it and a
/// delimiter inside an element splits into two elements on read. A `null`
/// element in JSON input decodes as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Option<String>>::deserialize(deserializer)?;
        Ok(Self(values.into_iter().map(Option::unwrap_or_default).collect()))
    }
}

impl StringList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Comma-joined form written to the column
    pub(crate) fn joined(&self) -> String {
        self.0.join(DELIMITER)
    }

    fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        Self(text.split(DELIMITER).map(str::to_string).collect())
    }
}

impl ColumnType for StringList {
    const DATA_TYPE: &'static str = "stringlist";

    fn to_db_value(&self) -> Result<DbValue, DataTypeError> {
        Ok(DbValue::Text(self.joined()))
    }

    fn from_db_value(value: DbValue) -> Result<Self, DataTypeError> {
        if value.is_null() {
            crate::trace_log!("NULL stringlist column read as empty list");
            return Ok(Self::new());
        }
        match value.as_text_bytes() {
            Some(bytes) => Ok(Self::from_text(std::str::from_utf8(bytes)?)),
            None => {
                crate::debug_log!("Rejecting {} value for stringlist column", value.kind());
                Err(DataTypeError::TypeMismatch {
                    type_name: Self::DATA_TYPE,
                    found: value.kind(),
                })
            }
        }
    }

    fn to_json(&self) -> Result<Vec<u8>, DataTypeError> {
        serde_json::to_vec(&self.0).map_err(DataTypeError::Encode)
    }

    fn from_json(bytes: &[u8]) -> Result<Self, DataTypeError> {
        serde_json::from_slice(bytes).map_err(DataTypeError::Parse)
    }

    fn db_data_type(dialect: &Dialect) -> Option<&'static str> {
        json_storage_type(dialect)
    }

    fn sql_expr(&self, target: &DialectTarget) -> Result<SqlExpr, DataTypeError> {
        let json = serde_json::to_string(&self.0).map_err(DataTypeError::Encode)?;
        Ok(json_literal(json, target))
    }
}

impl Deref for StringList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for StringList {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for StringList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
