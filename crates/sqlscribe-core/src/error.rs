//! Core error types.

use thiserror::Error;

/// Errors produced while rendering or emitting statements.
#[derive(Debug, Error)]
pub enum Error {
    /// A declared field has no value in the row being rendered.
    #[error("model '{model}' has no value for field '{field}'")]
    MissingField {
        /// Model definition name.
        model: String,
        /// Declared field name.
        field: String,
    },

    /// Insert rendered against a model with no declared fields.
    #[error("model '{0}' declares no fields")]
    EmptyModel(String),

    /// Output sink failure during emission.
    #[error("emit error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema definition could not be loaded.
    #[error("schema error: {0}")]
    Schema(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
