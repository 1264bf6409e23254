//! Error types for STL export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL export operations.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while writing STL data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StlError {
    /// The output file could not be created.
    #[error("cannot create {path}: {source}")]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
