//! Nullable columns
//!
//! `None` is the absent state: it writes a SQL NULL and encodes as JSON
//! `null`. Reads never produce `None` from the database, a NULL column
//! decodes to `Some` of an empty collection.

use type_mapping::{Dialect, DialectTarget, DbValue, SqlExpr};

use crate::errors::DataTypeError;
use crate::traits::ColumnType;

const JSON_NULL: &[u8] = b"null";

impl<T: ColumnType> ColumnType for Option<T> {
    const DATA_TYPE: &'static str = T::DATA_TYPE;

    fn to_db_value(&self) -> Result<DbValue, DataTypeError> {
        match self {
            Some(value) => value.to_db_value(),
            None => Ok(DbValue::Null),
        }
    }

    fn from_db_value(value: DbValue) -> Result<Self, DataTypeError> {
        T::from_db_value(value).map(Some)
    }

    fn to_json(&self) -> Result<Vec<u8>, DataTypeError> {
        match self {
            Some(value) => value.to_json(),
            None => Ok(JSON_NULL.to_vec()),
        }
    }

    fn from_json(bytes: &[u8]) -> Result<Self, DataTypeError> {
        if bytes.trim_ascii() == JSON_NULL {
            return Ok(None);
        }
        T::from_json(bytes).map(Some)
    }

    fn db_data_type(dialect: &Dialect) -> Option<&'static str> {
        T::db_data_type(dialect)
    }

    fn sql_expr(&self, target: &DialectTarget) -> Result<SqlExpr, DataTypeError> {
        match self {
            Some(value) => value.sql_expr(target),
            None => Ok(SqlExpr::param(DbValue::Null)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MapList, StringList};

    #[test]
    fn test_none_writes_null() {
        assert_eq!(None::<StringList>.to_db_value().unwrap(), DbValue::Null);
        assert_eq!(None::<MapList>.to_db_value().unwrap(), DbValue::Null);
    }

    #[test]
    fn test_null_reads_as_some_empty() {
        let list = Option::<StringList>::from_db_value(DbValue::Null).unwrap();
        assert_eq!(list, Some(StringList::new()));

        let maps = Option::<MapList>::from_db_value(DbValue::Null).unwrap();
        assert_eq!(maps, Some(MapList::new()));
    }

    #[test]
    fn test_none_vs_empty_json() {
        assert_eq!(None::<MapList>.to_json().unwrap(), b"null");
        assert_eq!(Some(MapList::new()).to_json().unwrap(), b"[]");
        assert_eq!(None::<StringList>.to_json().unwrap(), b"null");

        assert_eq!(Option::<StringList>::from_json(b" null ").unwrap(), None);
        assert_eq!(
            Option::<StringList>::from_json(b"[]").unwrap(),
            Some(StringList::new())
        );
    }

    #[test]
    fn test_none_literal_is_sql_null() {
        let target = DialectTarget::new(Dialect::Mysql).with_server_version("8.0.31");
        let expr = None::<MapList>.sql_expr(&target).unwrap();
        assert_eq!(expr.sql, "?");
        assert_eq!(expr.args, vec![DbValue::Null]);
    }

    #[test]
    fn test_data_type_passes_through() {
        assert_eq!(<Option<MapList> as ColumnType>::DATA_TYPE, "maplist");
        assert_eq!(
            <Option<StringList> as ColumnType>::db_data_type(&Dialect::Postgres),
            Some("JSONB")
        );
    }
}
