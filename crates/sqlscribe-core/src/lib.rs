//! sqlscribe core - declarative schema model and SQL text rendering.
//!
//! This crate turns declarative model definitions into `CREATE TABLE` and
//! `INSERT` statement text and emits it to an output channel. Nothing is
//! ever executed against a database engine.

pub mod emit;
pub mod error;
pub mod model;
pub mod row;
pub mod schema;
pub mod sql;
pub mod value;

pub use emit::Emitter;
pub use error::{Error, Result};
pub use model::Model;
pub use row::Row;
pub use schema::{FieldSpec, LogicalType, ModelDef};
pub use value::Value;
