//! Error types for sample sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make a sample sheet unusable.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited text could not be parsed.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// No header line after the directive line.
    #[error("no header line in {path}")]
    NoHeader { path: PathBuf },

    /// Header line has no named columns.
    #[error("header line of {path} has no columns")]
    NoColumns { path: PathBuf },

    /// Two columns share a name.
    #[error("duplicate column '{header}' in {path}")]
    DuplicateHeader { path: PathBuf, header: String },

    /// No data rows after the header line.
    #[error("no data rows in {path}")]
    NoRows { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
