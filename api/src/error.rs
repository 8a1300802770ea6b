//! Error taxonomy for todo API calls.
//!
//! Callers rarely match beyond "did it work": the state layer folds any of
//! these into a single human-readable message. The variants exist so logs
//! and tests can tell a rejected request from a dead network.

use crate::types::TodoId;

/// Convenience alias for API results.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure modes of a todo API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the request as invalid (HTTP 400).
    #[error("validation failed: {message}")]
    Validation {
        /// Server-provided reason, e.g. "Title is required"
        message: String,
    },

    /// The addressed todo does not exist (HTTP 404).
    #[error("todo {id} not found")]
    NotFound {
        /// The id the request addressed
        id: TodoId,
    },

    /// Any other non-success response from the server.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided message, or the raw body when unparseable
        message: String,
    },

    /// The request never completed: connection refused, DNS, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body we could not parse.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this is a validation rejection.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether this is a missing-record error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the request failed before the server answered.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
