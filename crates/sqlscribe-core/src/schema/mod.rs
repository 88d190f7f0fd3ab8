//! Declarative schema model for sqlscribe.
//!
//! A schema is an ordered set of field descriptors collected under a model
//! definition, registered once at declaration time.

mod field;
mod model;
mod types;

pub use field::FieldSpec;
pub use model::ModelDef;
pub use types::LogicalType;
