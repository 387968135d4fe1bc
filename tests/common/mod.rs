#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use wiremock::MockServer;

use quiz_translate_backend::config::Config;
use quiz_translate_backend::routes;
use quiz_translate_backend::state::AppState;

pub const API_KEY: &str = "gsk-test-key";
pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

pub struct TestApp {
    pub router: Router,
    pub upstream: MockServer,
}

/// Build the router against a fresh mock completion API. The key lives in an
/// environment variable unique to this app so parallel tests don't collide.
pub async fn spawn_app(api_key: Option<&str>) -> TestApp {
    let upstream = MockServer::start().await;

    let mut config = Config::default();
    config.completion_config.base_url = format!("{}/openai/v1", upstream.uri());
    config.completion_config.api_key_env =
        format!("QTB_IT_KEY_{}", uuid::Uuid::new_v4().simple());
    if let Some(key) = api_key {
        std::env::set_var(&config.completion_config.api_key_env, key);
    }

    let state = AppState::new(config).expect("Failed to build app state");
    TestApp {
        router: routes::app(state),
        upstream,
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).expect("Response body is not JSON");
        (status, body)
    }

    pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send("POST", uri, body).await
    }

    /// JSON bodies of every request the mock completion API received
    pub async fn upstream_bodies(&self) -> Vec<Value> {
        self.upstream
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.body_json::<Value>().unwrap())
            .collect()
    }
}

/// A chat-completions reply in the shape Groq returns
pub fn completion_reply(content: Option<&str>) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
