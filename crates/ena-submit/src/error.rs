//! Error types for drop-box submission.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for submission operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// Home directory could not be determined for the default credentials path.
    #[error("cannot locate the home directory for the default credentials file")]
    NoHomeDir,

    #[error("credentials file not found: {path}")]
    CredentialsNotFound { path: PathBuf },

    #[error("failed to read credentials {path}: {message}")]
    Credentials { path: PathBuf, message: String },

    #[error("submission document not found: {path}")]
    MissingDocument { path: PathBuf },

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the drop-box.
    #[error("drop-box returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse receipt: {0}")]
    Receipt(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
