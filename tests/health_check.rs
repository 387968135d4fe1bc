mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{spawn_app, API_KEY};

#[tokio::test]
async fn health_reports_key_presence() {
    let app = spawn_app(Some(API_KEY)).await;
    let (status, body) = app.send("GET", "/api/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "api_key_configured": true}));

    let app = spawn_app(None).await;
    let (_, body) = app.send("GET", "/api/health", "").await;
    assert_eq!(body["api_key_configured"], false);
}
