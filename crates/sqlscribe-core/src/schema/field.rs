//! Field descriptors.

use super::types::LogicalType;
use crate::value::Value;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A field descriptor: one column's declared type and constraints,
/// independent of any concrete row value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name (unique within a model).
    pub name: String,
    /// Declared logical type.
    pub logical_type: LogicalType,
    /// Maximum length. Only meaningful for text fields; rendering appends
    /// it whenever present and nonzero, whatever the type.
    pub max_length: Option<u32>,
    /// Whether NULL is allowed.
    pub nullable: bool,
    /// Default value if not provided.
    pub default: Option<Value>,
}

impl FieldSpec {
    /// Create a bare field: not nullable, no length, no default.
    pub fn new(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
            max_length: None,
            nullable: false,
            default: None,
        }
    }

    /// A text field: max length 255, not nullable, default empty string.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, LogicalType::Text)
            .with_max_length(255)
            .with_default(Value::Text(String::new()))
    }

    /// An integer field: not nullable, default 0.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, LogicalType::Integer).with_default(Value::Integer(0))
    }

    /// A date field: not nullable, defaulting to the given date.
    ///
    /// The default is whatever date the caller captured, once, when the
    /// schema was declared. Do not evaluate "today" in here; a schema
    /// carries one fixed default date for its whole lifetime.
    pub fn date(name: impl Into<String>, default: NaiveDate) -> Self {
        Self::new(name, LogicalType::Date).with_default(Value::Date(default))
    }

    /// Set the maximum length.
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Allow NULL for this field.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Check if this field has a default value.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Render the column-type fragment for this field.
    ///
    /// The shape is `<TYPE> [(<n>)] [NOT NULL] [DEFAULT '<value>']`. The
    /// length piece is suppressed when absent or zero. Defaults are always
    /// single-quoted, numeric and date ones included — observed behavior of
    /// the statements this crate reproduces, kept rather than corrected.
    pub fn sql_fragment(&self) -> String {
        let mut pieces: Vec<String> = Vec::new();

        if let Some(n) = self.max_length {
            if n > 0 {
                pieces.push(format!("({})", n));
            }
        }
        if !self.nullable {
            pieces.push("NOT NULL".to_string());
        }
        if let Some(default) = &self.default {
            pieces.push(format!("DEFAULT '{}'", default));
        }

        if pieces.is_empty() {
            self.logical_type.sql_type().to_string()
        } else {
            format!("{} {}", self.logical_type.sql_type(), pieces.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_variant_fragment() {
        let field = FieldSpec::text("title");
        assert_eq!(field.sql_fragment(), "VARCHAR (255) NOT NULL DEFAULT ''");
    }

    #[test]
    fn test_integer_variant_fragment() {
        let field = FieldSpec::integer("year");
        assert_eq!(field.sql_fragment(), "INTEGER NOT NULL DEFAULT '0'");
    }

    #[test]
    fn test_date_variant_fragment() {
        let frozen = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let field = FieldSpec::date("published_date", frozen);
        assert_eq!(field.sql_fragment(), "DATE NOT NULL DEFAULT '2024-01-15'");
    }

    #[test]
    fn test_not_null_tracks_nullability() {
        let required = FieldSpec::new("a", LogicalType::Integer);
        assert!(required.sql_fragment().contains("NOT NULL"));

        let optional = FieldSpec::new("a", LogicalType::Integer).nullable();
        assert!(!optional.sql_fragment().contains("NOT NULL"));
    }

    #[test]
    fn test_zero_length_suppressed() {
        let field = FieldSpec::new("note", LogicalType::Text).with_max_length(0);
        assert_eq!(field.sql_fragment(), "VARCHAR NOT NULL");
    }

    #[test]
    fn test_bare_nullable_field_is_just_the_type() {
        let field = FieldSpec::new("note", LogicalType::Text).nullable();
        assert_eq!(field.sql_fragment(), "VARCHAR");
    }

    #[test]
    fn test_unrecognized_type_renders_text() {
        let field = FieldSpec::new("shape", LogicalType::Other("geometry".into()));
        assert_eq!(field.sql_fragment(), "TEXT NOT NULL");
    }

    #[test]
    fn test_empty_and_zero_defaults_still_render() {
        // A present default renders even when falsy, quoted whatever its type.
        let text = FieldSpec::text("s");
        assert!(text.sql_fragment().contains("DEFAULT ''"));

        let num = FieldSpec::integer("n");
        assert!(num.sql_fragment().contains("DEFAULT '0'"));
    }

    #[test]
    fn test_builder_overrides() {
        let field = FieldSpec::text("author").with_max_length(100);
        assert_eq!(field.sql_fragment(), "VARCHAR (100) NOT NULL DEFAULT ''");
    }
}
