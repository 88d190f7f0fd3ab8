//! Model definitions.

use super::field::FieldSpec;
use serde::{Deserialize, Serialize};

/// A model definition (table schema): a name and an ordered field list.
///
/// Field order is registration order, and it is the order every rendered
/// statement iterates in. A definition is built once, when the model type
/// is declared, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    /// Model name (the declared type's name).
    pub name: String,
    /// Field definitions in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl ModelDef {
    /// Create an empty model definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Register a field.
    ///
    /// Re-registering a name replaces the earlier descriptor in place,
    /// keeping its original position.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Register multiple fields.
    pub fn with_fields(self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        fields.into_iter().fold(self, ModelDef::with_field)
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
