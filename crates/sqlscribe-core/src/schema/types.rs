//! Logical column types and their SQL type mapping.

use serde::{Deserialize, Serialize};

/// Logical types a field can declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalType {
    /// Variable-length text.
    Text,
    /// Signed integer.
    Integer,
    /// Calendar date.
    Date,
    /// A type the mapping does not recognize. Renders as TEXT.
    Other(String),
}

impl LogicalType {
    /// The SQL type keyword for this logical type.
    ///
    /// Unrecognized types silently degrade to `TEXT` rather than failing.
    pub fn sql_type(&self) -> &str {
        match self {
            LogicalType::Text => "VARCHAR",
            LogicalType::Integer => "INTEGER",
            LogicalType::Date => "DATE",
            LogicalType::Other(_) => "TEXT",
        }
    }

    /// Check if this type is textual.
    pub fn is_text(&self) -> bool {
        matches!(self, LogicalType::Text)
    }
}
