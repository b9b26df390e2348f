//! Error types for mapping operations.

use std::path::PathBuf;

use ena_model::ModelError;
use thiserror::Error;

/// Errors from loading or applying a header map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingError {
    /// Mapping file does not exist.
    #[error("mapping file not found: {path}")]
    NotFound { path: PathBuf },

    /// Mapping file could not be read or parsed as delimited text.
    #[error("failed to read mapping file {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Mapping file has no entries.
    #[error("mapping file is empty: {path}")]
    Empty { path: PathBuf },

    /// A row does not carry both a source and a target.
    #[error("malformed mapping in {path} at line {line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Two columns end up with the same name after mapping.
    #[error("columns '{first}' and '{second}' both map to '{target}'")]
    TargetCollision {
        target: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
