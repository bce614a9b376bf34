//! Error types for cell stores

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for cell store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while storing or loading cells
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the key
    #[error("Cell not found: {key}")]
    CellNotFound { key: String },

    /// A stored record could not be decoded
    #[error("Malformed cell record: {0}")]
    Malformed(String),

    /// Filesystem error in the disk store
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error returned by a caller-supplied visitor
    #[error("Visitor failed: {0}")]
    Visitor(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The store was used after [`crate::CellStore::close`]
    #[error("Cell store is closed")]
    Closed,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetstore_core::Error),
}

impl StoreError {
    /// Create a not-found error for `key`
    pub fn not_found<S: Into<String>>(key: S) -> Self {
        StoreError::CellNotFound { key: key.into() }
    }

    /// Wrap an error raised inside a visitor callback
    pub fn visitor<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        StoreError::Visitor(err.into())
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Check whether this error reports a missing cell
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::CellNotFound { .. })
    }
}
