use axum::{
    extract::State,
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{generate_quiz, translate_text};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Handlers answer every method themselves so non-POST gets a JSON 405
        .route("/api/quiz", any(generate_quiz))
        .route("/api/translate", any(translate_text))
        // Paths the existing front-end calls
        .route("/.netlify/functions/quiz", any(generate_quiz))
        .route("/.netlify/functions/translate", any(translate_text))
}

/// Full application router with its layers and state attached
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "api_key_configured": state.api_key().is_ok()
    }))
}
