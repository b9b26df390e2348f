//! Error types for checklist resolution.

use thiserror::Error;

/// Errors raised while fetching or parsing a checklist.
///
/// All variants are fatal for a run: nothing downstream can proceed without
/// the field catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChecklistError {
    /// Identifier was empty or whitespace.
    #[error("checklist identifier is empty")]
    EmptyId,

    /// HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    /// Registry unreachable or the request timed out.
    #[error("could not fetch checklist {checklist_id}: {message}")]
    Network {
        checklist_id: String,
        message: String,
    },

    /// Registry answered with a non-success status.
    #[error("checklist {checklist_id} lookup failed with HTTP {status}: {body}")]
    Status {
        checklist_id: String,
        status: u16,
        body: String,
    },

    /// Response body is not a usable checklist document.
    #[error("checklist {checklist_id} is not a valid checklist document: {message}")]
    Parse {
        checklist_id: String,
        message: String,
    },
}

impl ChecklistError {
    /// The checklist accession the error relates to, if any.
    pub fn checklist_id(&self) -> Option<&str> {
        match self {
            Self::Network { checklist_id, .. }
            | Self::Status { checklist_id, .. }
            | Self::Parse { checklist_id, .. } => Some(checklist_id),
            Self::EmptyId | Self::Client(_) => None,
        }
    }
}

/// Result type for checklist operations.
pub type Result<T> = std::result::Result<T, ChecklistError>;
