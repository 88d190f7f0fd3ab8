//! Declarative model base.
//!
//! A model type declares its schema once and gains table-creation and
//! row-insertion rendering for free. Implementors typically build the
//! definition inside a `OnceLock` so the schema is collected exactly once
//! per type and is immutable afterwards.

use crate::emit::Emitter;
use crate::error::Result;
use crate::row::Row;
use crate::schema::ModelDef;
use crate::sql;
use std::io::Write;

/// Base trait for declarative record types.
pub trait Model {
    /// The model's collected schema. Built once, never mutated.
    fn model_def() -> &'static ModelDef;

    /// The instance's current field values.
    fn row(&self) -> Row;

    /// Table name used by [`save`](Self::save): the model name, lowercased.
    fn table_name() -> String {
        Self::model_def().name.to_lowercase()
    }

    /// Render the `CREATE TABLE` statement for an explicit table name.
    fn create_table_sql(table_name: &str) -> String {
        sql::create_table(Self::model_def(), table_name)
    }

    /// Render the `INSERT` statement for this instance.
    fn insert_sql(&self) -> Result<String> {
        sql::insert(Self::model_def(), &Self::table_name(), &self.row())
    }

    /// Emit the `CREATE TABLE` statement.
    fn create_table<W: Write>(emitter: &mut Emitter<W>, table_name: &str) -> Result<()> {
        emitter.emit(&Self::create_table_sql(table_name))
    }

    /// Emit the `INSERT` statement for this instance.
    fn save<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        emitter.emit(&self.insert_sql()?)
    }
}
