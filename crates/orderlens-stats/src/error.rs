//! Error types for orderlens-stats

use orderlens_table::TableError;
use thiserror::Error;

/// Main error type for summarizer operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Dataset access errors (missing column, wrong column type)
    #[error(transparent)]
    Table(#[from] TableError),

    /// A request named no columns where at least one is required
    #[error("Empty selection: {0}")]
    EmptySelection(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StatsError {
    /// Check if this is a missing-column error
    pub fn is_column_not_found(&self) -> bool {
        matches!(self, StatsError::Table(TableError::ColumnNotFound(_)))
    }
}

/// Result type alias for summarizer operations
pub type StatsResult<T> = Result<T, StatsError>;
