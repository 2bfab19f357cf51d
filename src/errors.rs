//! Error types for the storetypes crate
//!
//! This module contains all error types that can be returned while converting
//! a column value between its in-memory, database and JSON forms.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataTypeError {
    #[error("Cannot decode {type_name} from a {found} value")]
    TypeMismatch {
        type_name: &'static str,
        found: &'static str,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Stored text is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),
}
