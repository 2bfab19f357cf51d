//! SQL type conversion utilities
//!
//! This module handles the storage type each dialect uses for JSON columns
//! and the parameterized expressions column values are written with.

use crate::dialect::Dialect;
use crate::types::DbValue;

/// Column type used for JSON-encoded collections, for DDL generation
///
/// `None` means the dialect has no preferred type and the caller should fall
/// back to its own default.
pub fn json_storage_type(dialect: &Dialect) -> Option<&'static str> {
    match dialect {
        Dialect::Sqlite => Some("JSON"),
        Dialect::Mysql => Some("JSON"),
        Dialect::Postgres => Some("JSONB"),
        Dialect::SqlServer => Some("NVARCHAR(MAX)"),
        Dialect::Other(_) => None,
    }
}

/// SQL fragment with `?` placeholders and the values bound to them
#[derive(Debug, Clone, PartialEq)]
pub struct SqlExpr {
    pub sql: String,
    pub args: Vec<DbValue>,
}

impl SqlExpr {
    pub fn new(sql: impl Into<String>, args: Vec<DbValue>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// A single bound parameter: `?`
    pub fn param(value: impl Into<DbValue>) -> Self {
        Self::new("?", vec![value.into()])
    }

    /// A single bound parameter cast to JSON: `CAST(? AS JSON)`
    pub fn cast_json(value: impl Into<DbValue>) -> Self {
        Self::new("CAST(? AS JSON)", vec![value.into()])
    }

    /// Rewrite placeholders into the dialect's native style
    ///
    /// `param_counter` is the next positional index and is advanced once per
    /// placeholder, so several expressions can be rendered into one statement.
    pub fn render(&self, dialect: &Dialect, param_counter: &mut usize) -> String {
        let mut rendered = String::with_capacity(self.sql.len() + 4);
        for ch in self.sql.chars() {
            if ch != '?' {
                rendered.push(ch);
                continue;
            }
            match dialect {
                Dialect::Postgres => rendered.push_str(&format!("${}", param_counter)),
                Dialect::SqlServer => rendered.push_str(&format!("@p{}", param_counter)),
                _ => rendered.push('?'),
            }
            *param_counter += 1;
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_storage_types() {
        assert_eq!(json_storage_type(&Dialect::Sqlite), Some("JSON"));
        assert_eq!(json_storage_type(&Dialect::Mysql), Some("JSON"));
        assert_eq!(json_storage_type(&Dialect::Postgres), Some("JSONB"));
        assert_eq!(json_storage_type(&Dialect::SqlServer), Some("NVARCHAR(MAX)"));
        assert_eq!(json_storage_type(&Dialect::from("oracle")), None);
    }

    #[test]
    fn test_render_placeholders() {
        let expr = SqlExpr::cast_json("[]");
        let mut counter = 1;

        assert_eq!(expr.render(&Dialect::Mysql, &mut counter), "CAST(? AS JSON)");
        assert_eq!(expr.render(&Dialect::Postgres, &mut counter), "CAST($2 AS JSON)");
        assert_eq!(expr.render(&Dialect::SqlServer, &mut counter), "CAST(@p3 AS JSON)");
        assert_eq!(counter, 4);
    }

    #[test]
    fn test_param_binds_single_value() {
        let expr = SqlExpr::param("[1]");
        assert_eq!(expr.sql, "?");
        assert_eq!(expr.args, vec![DbValue::Text("[1]".to_string())]);
    }
}
