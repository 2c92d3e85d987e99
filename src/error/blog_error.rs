//! Unified error type for blogdeck.

use thiserror::Error;

use super::network::NetworkError;
use crate::models::PostId;

/// Every failure the library surfaces.
#[derive(Debug, Error)]
pub enum BlogError {
    /// Transport failure, non-2xx status or unparseable response
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The requested post does not exist
    #[error("Post {id} not found")]
    NotFound { id: PostId },

    /// Input rejected before any request was made
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlogError {
    /// Text suitable for showing in the UI.
    pub fn user_message(&self) -> String {
        match self {
            BlogError::Network(err) => err.user_message(),
            BlogError::NotFound { id } => format!("Post {} no longer exists.", id),
            BlogError::Validation(message) => message.clone(),
            BlogError::Io(err) => format!("File error: {}", err),
            BlogError::Json(err) => format!("Malformed data: {}", err),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            BlogError::Network(err) => err.error_code(),
            BlogError::NotFound { .. } => "E_NOT_FOUND",
            BlogError::Validation(_) => "E_VALIDATION",
            BlogError::Io(_) => "E_IO",
            BlogError::Json(_) => "E_JSON",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            BlogError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogError::NotFound { .. })
    }
}

/// Type alias for Results using BlogError.
pub type BlogResult<T> = Result<T, BlogError>;
