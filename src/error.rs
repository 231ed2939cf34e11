//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the question store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode question store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors returned by quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// No attending with this id.
    #[error("Attending '{0}' not found")]
    AttendingNotFound(String),

    /// No question with this id under the requested attending.
    #[error("Question '{0}' not found")]
    QuestionNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QuizError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QuizError::AttendingNotFound(_) | QuizError::QuestionNotFound(_)
        )
    }
}
