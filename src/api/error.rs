//! Errors produced by the API client.

use thiserror::Error;

use crate::traits::HttpError;

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got an answer
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded into the expected record
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server could not be reached.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Transport(err) if err.is_connectivity())
    }

    /// Whether the server was reached and refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}
