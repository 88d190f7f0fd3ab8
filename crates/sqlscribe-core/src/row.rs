//! Row values for model instances.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping from field name to runtime value.
///
/// A row accepts any name; nothing checks it against a schema. Names the
/// schema never declared are simply never read when a statement is
/// rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, overwriting any earlier value for the same name.
    /// First-insertion order is kept.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a value by field name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let row = Row::new().with("title", "Python Cookbook").with("year", 2012);

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("title").and_then(Value::as_str), Some("Python Cookbook"));
        assert_eq!(row.get("year").and_then(Value::as_i64), Some(2012));
        assert!(row.get("missing").is_none());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let row = Row::new()
            .with("title", "first")
            .with("year", 2012)
            .with("title", "second");

        assert_eq!(row.len(), 2);
        let names: Vec<_> = row.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["title", "year"]);
        assert_eq!(row.get("title").and_then(Value::as_str), Some("second"));
    }

    #[test]
    fn test_arbitrary_names_accepted() {
        let mut row = Row::new();
        row.set("not_in_any_schema", 1);
        assert_eq!(row.len(), 1);
    }
}
