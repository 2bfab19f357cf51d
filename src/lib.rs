//! # storetypes
//!
//! String list and map list column types for SQL databases. Each type moves
//! between three forms: the in-memory collection, the scalar stored in its
//! column, and the JSON document exchanged over an API.
//!
//! ## Quick Start
//!
//! ```rust
//! use storetypes::prelude::*;
//! use serde_json::json;
//!
//! let tags = StringList::from(vec!["rust", "sql"]);
//! assert_eq!(tags.to_db_value()?, DbValue::Text("rust,sql".to_string()));
//!
//! let rows = MapList::from_value(json!([{"a": 1}]))?;
//! let target = DialectTarget::new(Dialect::Mysql).with_server_version("8.0.31");
//! let expr = rows.sql_expr(&target)?;
//! assert_eq!(expr.sql, "CAST(? AS JSON)");
//!
//! assert_eq!(MapList::db_data_type(&Dialect::Postgres), Some("JSONB"));
//! assert_eq!(None::<MapList>.to_json()?, b"null");
//! # Ok::<(), storetypes::DataTypeError>(())
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod map_list;
pub mod nullable;
pub mod postgres;
pub mod prelude;
pub mod string_list;
pub mod traits;

// Re-export the main public types for convenience
pub use errors::DataTypeError;
pub use map_list::{JsonMap, MapList};
pub use string_list::StringList;
pub use traits::ColumnType;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export internal crates used in the public API
pub use type_mapping;
pub use type_mapping::{Dialect, DialectTarget, DbValue, SqlExpr};

// Re-export external dependencies used in public API
pub use sqlx;
