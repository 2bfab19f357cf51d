//! Unified type mapping between column types and the SQL dialects they are stored in
//! This crate provides the dialect, storage scalar and SQL expression vocabulary used across storetypes

pub mod dialect;
pub mod sql;
pub mod types;

pub use dialect::{Dialect, DialectTarget};
pub use sql::{json_storage_type, SqlExpr};
pub use types::DbValue;
