//! Error types for sheetstore-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetstore-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Text that does not follow the `sheet:row:col` key layout
    #[error("Invalid cell key: {0}")]
    InvalidKey(String),

    /// Cell type discriminant with no matching [`crate::CellType`]
    #[error("Invalid cell type: {0}")]
    InvalidCellType(i64),
}
