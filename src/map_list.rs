//! Map list column type
//!
//! Stored and exchanged as a JSON array of objects. Numbers keep the exact
//! digits they were decoded with.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::ops::Deref;
use type_mapping::{json_storage_type, Dialect, DialectTarget, DbValue, SqlExpr};

use crate::errors::DataTypeError;
use crate::traits::{json_literal, ColumnType};

/// One element of a [`MapList`]
pub type JsonMap = Map<String, Value>;

/// Ordered list of string-keyed JSON objects
///
/// A `null` element decodes as an empty map, so `[null]` reads back as
/// `[{}]`. Numbers keep their digits, but exponents are normalized:
/// `1.50` stays `1.50` while `1e400` re-encodes as `1e+400`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MapList(pub Vec<JsonMap>);

impl<'de> Deserialize<'de> for MapList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let maps = Vec::<Option<JsonMap>>::deserialize(deserializer)?;
        Ok(Self(maps.into_iter().map(Option::unwrap_or_default).collect()))
    }
}

impl MapList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, map: JsonMap) {
        self.0.push(map);
    }

    pub fn into_inner(self) -> Vec<JsonMap> {
        self.0
    }

    /// Build from a JSON value, which must be an array of objects
    pub fn from_value(value: Value) -> Result<Self, DataTypeError> {
        serde_json::from_value(value).map_err(DataTypeError::Parse)
    }

    pub(crate) fn to_json_string(&self) -> Result<String, DataTypeError> {
        serde_json::to_string(&self.0).map_err(DataTypeError::Encode)
    }

    fn from_text(bytes: &[u8]) -> Result<Self, DataTypeError> {
        // A stored JSON `null` reads back like a SQL NULL
        let maps: Option<Self> = serde_json::from_slice(bytes).map_err(DataTypeError::Parse)?;
        Ok(maps.unwrap_or_default())
    }
}

impl ColumnType for MapList {
    const DATA_TYPE: &'static str = "maplist";

    fn to_db_value(&self) -> Result<DbValue, DataTypeError> {
        self.to_json_string().map(DbValue::Text)
    }

    fn from_db_value(value: DbValue) -> Result<Self, DataTypeError> {
        if value.is_null() {
            crate::trace_log!("NULL maplist column read as empty list");
            return Ok(Self::new());
        }
        match value.as_text_bytes() {
            Some(bytes) => Self::from_text(bytes),
            None => {
                crate::debug_log!("Rejecting {} value for maplist column", value.kind());
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
        Ok(json_literal(self.to_json_string()?, target))
    }
}

impl Deref for MapList {
    type Target = [JsonMap];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<JsonMap>> for MapList {
    fn from(maps: Vec<JsonMap>) -> Self {
        Self(maps)
    }
}

impl FromIterator<JsonMap> for MapList {
    fn from_iter<I: IntoIterator<Item = JsonMap>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MapList {
    type Item = JsonMap;
    type IntoIter = std::vec::IntoIter<JsonMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MapList {
    type Item = &'a JsonMap;
    type IntoIter = std::slice::Iter<'a, JsonMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> MapList {
        MapList::from_value(json!([
            {"name": "alpha", "tags": ["x", "y"], "active": true},
            {"name": "beta", "score": 1.5, "parent": null}
        ]))
        .unwrap()
    }

    #[test]
    fn test_db_value_round_trip() {
        let list = sample();
        let stored = list.to_db_value().unwrap();
        assert!(matches!(stored, DbValue::Text(_)));

        let restored = MapList::from_db_value(stored).unwrap();
        assert_eq!(restored, list);
    }

    #[test]
    fn test_empty_list_encodes_as_array() {
        assert_eq!(
            MapList::new().to_db_value().unwrap(),
            DbValue::Text("[]".to_string())
        );
        assert_eq!(MapList::new().to_json().unwrap(), b"[]");
    }

    #[test]
    fn test_null_reads_as_empty() {
        assert!(MapList::from_db_value(DbValue::Null).unwrap().is_empty());
        assert!(MapList::from_db_value(DbValue::from("null")).unwrap().is_empty());
    }

    #[test]
    fn test_reads_bytes() {
        let list = MapList::from_db_value(DbValue::from(br#"[{"a":1}]"#.to_vec())).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["a"], json!(1));
    }

    #[test]
    fn test_rejects_non_text() {
        let err = MapList::from_db_value(DbValue::Boolean(true)).unwrap_err();
        assert!(matches!(
            err,
            DataTypeError::TypeMismatch {
                type_name: "maplist",
                found: "boolean"
            }
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = MapList::from_db_value(DbValue::from("[{\"a\":")).unwrap_err();
        assert!(matches!(err, DataTypeError::Parse(_)));

        // Elements must be objects
        assert!(matches!(
            MapList::from_json(b"[1, 2]"),
            Err(DataTypeError::Parse(_))
        ));
    }

    #[test]
    fn test_large_integer_keeps_digits() {
        let list = MapList::from_json(br#"[{"id":10000000000000000002}]"#).unwrap();
        let encoded = String::from_utf8(list.to_json().unwrap()).unwrap();
        assert_eq!(encoded, r#"[{"id":10000000000000000002}]"#);

        let stored = MapList::from_db_value(DbValue::from(r#"[{"pi":3.14159265358979323846264}]"#))
            .unwrap()
            .to_db_value()
            .unwrap();
        assert_eq!(
            stored,
            DbValue::Text(r#"[{"pi":3.14159265358979323846264}]"#.to_string())
        );
    }

    #[test]
    fn test_null_elements_read_as_empty_maps() {
        let list = MapList::from_db_value(DbValue::from(r#"[{"a":1},null]"#)).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["a"], json!(1));
        assert!(list[1].is_empty());

        let list = MapList::from_json(b"[null]").unwrap();
        assert_eq!(list.to_json().unwrap(), b"[{}]");

        let list = MapList::from_value(json!([null, {"b": true}])).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_number_text_forms() {
        let list = MapList::from_json(br#"[{"price":1.50}]"#).unwrap();
        assert_eq!(list.to_json().unwrap(), br#"[{"price":1.50}]"#);

        let list = MapList::from_json(br#"[{"huge":1e400}]"#).unwrap();
        assert_eq!(list.to_json().unwrap(), br#"[{"huge":1e+400}]"#);
    }

    #[test]
    fn test_element_order_preserved() {
        let list = MapList::from_json(br#"[{"i":3},{"i":1},{"i":2}]"#).unwrap();
        let order: Vec<&Value> = list.iter().map(|m| &m["i"]).collect();
        assert_eq!(order, vec![&json!(3), &json!(1), &json!(2)]);
    }
}
