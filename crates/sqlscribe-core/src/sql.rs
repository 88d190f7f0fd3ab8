//! SQL statement rendering.
//!
//! Statements are assembled as plain text and never executed. Values are
//! interpolated with naive single-quoting: no escaping, no parameters. A
//! value containing a quote character corrupts the statement; that is the
//! observed behavior of the statements this crate reproduces.

use crate::error::{Error, Result};
use crate::row::Row;
use crate::schema::ModelDef;

/// Render a `CREATE TABLE IF NOT EXISTS` statement for a model definition.
///
/// Columns appear in schema order, joined by `", "`.
pub fn create_table(def: &ModelDef, table_name: &str) -> String {
    let columns = def
        .fields
        .iter()
        .map(|f| format!("{} {}", f.name, f.sql_fragment()))
        .collect::<Vec<_>>()
        .join(", ");

    format!("CREATE TABLE IF NOT EXISTS {} ({});", table_name, columns)
}

/// Render an `INSERT` statement for one row of a model.
///
/// Column names and values both follow schema order; names the row carries
/// beyond the schema are ignored. Every value is single-quoted, whatever
/// its type. A declared field the row has no value for is an error rather
/// than a silently malformed statement.
pub fn insert(def: &ModelDef, table_name: &str, row: &Row) -> Result<String> {
    if def.is_empty() {
        return Err(Error::EmptyModel(def.name.clone()));
    }

    let mut columns = Vec::with_capacity(def.len());
    let mut values = Vec::with_capacity(def.len());
    for field in &def.fields {
        let value = row.get(&field.name).ok_or_else(|| Error::MissingField {
            model: def.name.clone(),
            field: field.name.clone(),
        })?;
        columns.push(field.name.as_str());
        values.push(format!("'{}'", value));
    }

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table_name,
        columns.join(", "),
        values.join(", ")
    ))
}
