//! Error types for the tablescope library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tablescope operations.
#[derive(Debug, Error)]
pub enum TableScopeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input has no header line or no data lines.
    #[error("Empty data: {0}")]
    EmptyInput(String),

    /// Every header cell was blank.
    #[error("No columns found: header row has no named columns")]
    NoColumns,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableScopeError {
    /// Returns true if the raw text itself was unusable as a table.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, TableScopeError::EmptyInput(_) | TableScopeError::NoColumns)
    }
}

/// Result type alias for tablescope operations.
pub type Result<T> = std::result::Result<T, TableScopeError>;
