use axum::{body::Bytes, extract::State, http::Method, Json};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{ensure_post, parse_body, required};
use crate::completion::CompletionError;
use crate::error::{ApiError, Endpoint, HandlerError};
use crate::state::AppState;
use crate::translate::{translation_completion_request, TranslationRequest, TranslationResponse};

/// POST `{"text", "fromLang", "toLang"}`, get back `{"translation": ...}`
#[instrument(name = "translate", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn translate_text(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<TranslationResponse>, ApiError> {
    run(&state, &method, &body)
        .await
        .map(Json)
        .map_err(|e| e.at(Endpoint::Translate))
}

async fn run(
    state: &AppState,
    method: &Method,
    body: &[u8],
) -> Result<TranslationResponse, HandlerError> {
    ensure_post(method)?;
    let request: TranslationRequest = parse_body(body)?;
    let api_key = state.api_key()?;
    let (Some(text), Some(from_lang), Some(to_lang)) = (
        required(request.text),
        required(request.from_lang),
        required(request.to_lang),
    ) else {
        return Err(HandlerError::BadRequest(
            "Missing required parameters".to_string(),
        ));
    };

    let settings = &state.config.completion_config.translation;
    let completion = translation_completion_request(settings, &text, &from_lang, &to_lang);
    let response = state
        .completion
        .chat_completion(&api_key, &completion)
        .await
        .map_err(|err| match err {
            // Only the status is reported for translation failures.
            CompletionError::Status { status, .. } => {
                HandlerError::UpstreamRequestFailed { status, body: None }
            }
            other => other.into(),
        })?;

    // A missing or blank reply is an empty translation, not a failure.
    let translation = response.first_content().unwrap_or_default().to_string();

    info!(
        model = %settings.model,
        from = %from_lang,
        to = %to_lang,
        chars = translation.chars().count(),
        "Translated text"
    );
    Ok(TranslationResponse { translation })
}
