use axum::{body::Bytes, extract::State, http::Method, Json};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use super::{ensure_post, parse_body, required};
use crate::error::{ApiError, Endpoint, HandlerError};
use crate::quiz::{quiz_completion_request, QuizRequest};
use crate::state::AppState;

/// POST a `{"topic": ...}` body, get back the model's `{"quiz": [...]}` object
#[instrument(name = "quiz", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn generate_quiz(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    run(&state, &method, &body)
        .await
        .map(Json)
        .map_err(|e| e.at(Endpoint::Quiz))
}

async fn run(state: &AppState, method: &Method, body: &[u8]) -> Result<Value, HandlerError> {
    ensure_post(method)?;
    let request: QuizRequest = parse_body(body)?;
    let api_key = state.api_key()?;
    let topic = required(request.topic).ok_or_else(|| {
        HandlerError::BadRequest("Missing required parameter: topic".to_string())
    })?;

    let settings = &state.config.completion_config.quiz;
    let completion = quiz_completion_request(settings, &topic);
    let response = state.completion.chat_completion(&api_key, &completion).await?;

    let content = response
        .first_content()
        .filter(|content| !content.is_empty())
        .ok_or(HandlerError::EmptyUpstreamContent)?;

    // The shape is whatever the model produced; only JSON validity is checked.
    let quiz: Value =
        serde_json::from_str(content).map_err(HandlerError::MalformedUpstreamResponse)?;

    info!(model = %settings.model, topic = %topic, "Generated quiz");
    Ok(quiz)
}
