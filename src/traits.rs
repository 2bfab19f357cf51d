//! Trait definitions
//!
//! This module defines the adapter contract a persistence layer uses to store
//! a column type and to move it across a JSON API boundary.

use type_mapping::{Dialect, DialectTarget, DbValue, SqlExpr};

use crate::errors::DataTypeError;

/// A value that occupies a single database column
///
/// Implemented by [`StringList`](crate::StringList), [`MapList`](crate::MapList)
/// and by `Option<T>` for the absent state.
pub trait ColumnType: Sized {
    /// Generic type tag, independent of dialect
    const DATA_TYPE: &'static str;

    /// Convert into the scalar written to the column
    fn to_db_value(&self) -> Result<DbValue, DataTypeError>;

    /// Build from the scalar read back from the column
    ///
    /// A SQL NULL yields an empty collection rather than an error.
    fn from_db_value(value: DbValue) -> Result<Self, DataTypeError>;

    /// Encode as a JSON document
    fn to_json(&self) -> Result<Vec<u8>, DataTypeError>;

    /// Decode from a JSON document
    fn from_json(bytes: &[u8]) -> Result<Self, DataTypeError>;

    /// Column type to declare in DDL, `None` to use the caller's default
    fn db_data_type(dialect: &Dialect) -> Option<&'static str>;

    /// Expression to write this value with in a statement for `target`
    fn sql_expr(&self, target: &DialectTarget) -> Result<SqlExpr, DataTypeError>;
}

/// Wrap encoded JSON text in the literal form `target` accepts
///
/// MySQL does not infer JSON typing from a string parameter in every
/// context, so it gets an explicit cast. MariaDB stores JSON as LONGTEXT and
/// takes the plain parameter like every other dialect.
pub(crate) fn json_literal(text: String, target: &DialectTarget) -> SqlExpr {
    if target.dialect == Dialect::Mysql && !target.is_mariadb() {
        crate::trace_log!("Casting JSON literal for MySQL server {:?}", target.server_version);
        SqlExpr::cast_json(text)
    } else {
        SqlExpr::param(text)
    }
}
