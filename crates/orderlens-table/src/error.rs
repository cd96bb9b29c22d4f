//! Error types for dataset access

use thiserror::Error;

/// Errors raised while building or reading a dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Length mismatch for column '{column}': expected {expected} rows, got {actual}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Type mismatch for column '{column}': expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },
}

/// Result type for dataset operations
pub type TableResult<T> = Result<T, TableError>;
