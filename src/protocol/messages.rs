//! Request payloads and response bodies of the HTTP API.
//!
//! All bodies are JSON.

use serde::{Deserialize, Serialize};

use crate::models::Question;

/// Body of `POST /api/questions/{attending_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: i64,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Body of `PUT /api/questions/{attending_id}/{question_id}`.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionUpdate {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct: Option<i64>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Body of `PUT /api/questions/{attending_id}/catchphrases`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatchphraseUpdate {
    #[serde(default)]
    pub catchphrase_correct: Option<String>,
    #[serde(default)]
    pub catchphrase_wrong: Option<String>,
}

/// Outcome tag carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Deleted,
    Error,
}

/// Body returned by the mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            question: None,
        }
    }

    pub fn with_question(question: Question) -> Self {
        Self {
            status: Status::Ok,
            question: Some(question),
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: Status::Deleted,
            question: None,
        }
    }
}

/// Body returned for any failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            detail: detail.into(),
        }
    }
}

/// Default HTTP port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8400;
