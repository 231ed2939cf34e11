//! HTTP handlers for the questions API.
//!
//! Each handler is one load, an optional mutation, and a save.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::QuizError;
use crate::models::QuizData;
use crate::protocol::{
    CatchphraseUpdate, ErrorResponse, NewQuestion, QuestionUpdate, StatusResponse,
};

use super::state::AppState;

type ApiResult<T> = Result<Json<T>, QuizError>;

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = if self.is_not_found() {
            tracing::debug!(error = %self, "Lookup failed");
            StatusCode::NOT_FOUND
        } else {
            tracing::error!(error = %self, "Question store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

pub async fn health() -> &'static str {
    "OK"
}

/// `GET /api/questions`
pub async fn list_questions(State(state): State<Arc<AppState>>) -> ApiResult<QuizData> {
    let data = state.store.load().await?;
    Ok(Json(data))
}

/// `POST /api/questions/{attending_id}`
pub async fn add_question(
    State(state): State<Arc<AppState>>,
    Path(attending_id): Path<String>,
    Json(payload): Json<NewQuestion>,
) -> ApiResult<StatusResponse> {
    let mut data = state.store.load().await?;
    let question = data.add_question(&attending_id, payload)?;
    state.store.save(&data).await?;

    tracing::info!(attending = %attending_id, question = %question.id, "Question added");
    Ok(Json(StatusResponse::with_question(question)))
}

/// `PUT /api/questions/{attending_id}/catchphrases`
pub async fn update_catchphrases(
    State(state): State<Arc<AppState>>,
    Path(attending_id): Path<String>,
    Json(payload): Json<CatchphraseUpdate>,
) -> ApiResult<StatusResponse> {
    let mut data = state.store.load().await?;
    data.update_catchphrases(&attending_id, payload)?;
    state.store.save(&data).await?;

    tracing::info!(attending = %attending_id, "Catchphrases updated");
    Ok(Json(StatusResponse::ok()))
}

/// `PUT /api/questions/{attending_id}/{question_id}`
pub async fn update_question(
    State(state): State<Arc<AppState>>,
    Path((attending_id, question_id)): Path<(String, String)>,
    Json(payload): Json<QuestionUpdate>,
) -> ApiResult<StatusResponse> {
    let mut data = state.store.load().await?;
    let question = data.update_question(&attending_id, &question_id, payload)?;
    state.store.save(&data).await?;

    tracing::info!(attending = %attending_id, question = %question_id, "Question updated");
    Ok(Json(StatusResponse::with_question(question)))
}

/// `DELETE /api/questions/{attending_id}/{question_id}`
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path((attending_id, question_id)): Path<(String, String)>,
) -> ApiResult<StatusResponse> {
    let mut data = state.store.load().await?;
    data.delete_question(&attending_id, &question_id)?;
    state.store.save(&data).await?;

    tracing::info!(attending = %attending_id, question = %question_id, "Question deleted");
    Ok(Json(StatusResponse::deleted()))
}
