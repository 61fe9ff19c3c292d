//! Error types for dataset access and mesh construction.

use thiserror::Error;

/// Result type alias using DataError.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while reading fields out of a visualization dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Field not found in dataset: {0}")]
    MissingField(String),

    #[error("Field '{0}' contains no finite values")]
    NoFiniteValues(String),

    #[error("Field shape {shape:?} holds {expected} values, got {actual}")]
    InvalidShape {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("Field '{field}' has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        field: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}
