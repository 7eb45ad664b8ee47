//! POST /ask — answers a question from the configured portfolio content.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    app::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What are her main skills?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(body) = body?;

    let question = body.question.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest("Question cannot be empty".into()));
    }

    let qa = state.contextor.ask(question).await?;
    Ok(Json(AskResponse { answer: qa.answer }))
}
