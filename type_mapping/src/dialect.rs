//! SQL dialect identification
//!
//! This module names the database engine families a column type can target
//! and carries the server version needed to tell forked distributions apart.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Database engine family
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dialect {
    Sqlite,
    Mysql,
    Postgres,
    SqlServer,
    /// Any engine without dedicated handling, keeps the driver name
    Other(String),
}

impl Dialect {
    /// Canonical driver name
    pub fn name(&self) -> &str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Mysql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::SqlServer => "sqlserver",
            Dialect::Other(name) => name,
        }
    }
}

impl From<&str> for Dialect {
    fn from(name: &str) -> Self {
        let name = name.trim();
        match name.to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Dialect::Sqlite,
            "mysql" => Dialect::Mysql,
            "postgres" | "postgresql" | "pg" => Dialect::Postgres,
            "sqlserver" | "mssql" => Dialect::SqlServer,
            _ => Dialect::Other(name.to_string()),
        }
    }
}

impl FromStr for Dialect {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Dialect::from(s))
    }
}

impl From<String> for Dialect {
    fn from(name: String) -> Self {
        Dialect::from(name.as_str())
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.name().to_string()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dialect plus the version string reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectTarget {
    pub dialect: Dialect,
    pub server_version: Option<String>,
}

impl DialectTarget {
    /// Target a dialect without version information
    pub fn new(dialect: impl Into<Dialect>) -> Self {
        Self {
            dialect: dialect.into(),
            server_version: None,
        }
    }

    /// Attach the server version string
    pub fn with_server_version(mut self, version: impl Into<String>) -> Self {
        self.server_version = Some(version.into());
        self
    }

    /// True when the server reports a MariaDB build
    pub fn is_mariadb(&self) -> bool {
        self.server_version
            .as_deref()
            .is_some_and(|version| version.contains("MariaDB"))
    }
}

impl From<Dialect> for DialectTarget {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}
