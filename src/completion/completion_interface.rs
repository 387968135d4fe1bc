use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Interface for a chat-completions backend.
/// Every call is independent: nothing is cached or retried.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one chat-completion request authorized with `api_key`
    async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError>;
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to reach completion API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to decode completion response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResponseFormat {
    /// Ask the model for a syntactically valid JSON object
    pub fn json_object() -> Self {
        Self {
            kind: "json_object".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Only the parts of the upstream reply the handlers read.
/// `choices` must be present; `null` entries and a missing `message` or
/// `content` inside a choice decode as no content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Option<Choice>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice with surrounding whitespace and BOMs trimmed
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .as_ref()?
            .message
            .as_ref()?
            .content
            .as_deref()
            .map(|content| content.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
    }
}
