//! Dataset construction errors

use thiserror::Error;

/// Errors raised while building a [`Dataset`](crate::model::Dataset).
///
/// These are the only failures the engine reports. Everything that happens
/// after a dataset is loaded recovers silently.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A column was declared with an empty key.
    #[error("column at position {position} has an empty key")]
    EmptyColumnKey { position: usize },

    /// Two columns share the same key.
    #[error("duplicate column key '{key}'")]
    DuplicateColumn { key: String },

    /// A row object has no `id` member.
    #[error("row at position {position} has no 'id'")]
    MissingRowId { position: usize },

    /// A row `id` is neither a string nor a number.
    #[error("row at position {position} has a non-scalar 'id'")]
    InvalidRowId { position: usize },

    /// A row is not a JSON object.
    #[error("row at position {position} is not an object")]
    InvalidRow { position: usize },

    /// Malformed JSON input.
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatasetError {
    /// Returns the position of the offending column or row, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            DatasetError::EmptyColumnKey { position }
            | DatasetError::MissingRowId { position }
            | DatasetError::InvalidRowId { position }
            | DatasetError::InvalidRow { position } => Some(*position),
            DatasetError::DuplicateColumn { .. } | DatasetError::Json(_) => None,
        }
    }
}
