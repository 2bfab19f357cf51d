//! Convenience re-exports for common storetypes usage
//!
//! # Example
//!
//! ```rust
//! use storetypes::prelude::*;
//!
//! let tags: StringList = ["a", "b"].into_iter().collect();
//! assert_eq!(StringList::DATA_TYPE, "stringlist");
//! # let _ = tags;
//! ```

// Column types and the adapter trait
pub use crate::errors::DataTypeError;
pub use crate::map_list::{JsonMap, MapList};
pub use crate::string_list::StringList;
pub use crate::traits::ColumnType;

// Dialect vocabulary
pub use type_mapping::{json_storage_type, Dialect, DialectTarget, DbValue, SqlExpr};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};
