use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::completion_interface::{
    ChatCompletionRequest, ChatCompletionResponse, CompletionClient, CompletionError,
};

/// Client for any OpenAI-compatible `/chat/completions` endpoint (Groq by default)
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    base_url: String,
}

impl OpenAICompatibleClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        info!("Initialized OpenAICompatibleClient: base_url={}", base_url);
        Self { client, base_url }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for OpenAICompatibleClient {
    async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = self.endpoint();
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            json_output = request.response_format.is_some(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(CompletionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(CompletionError::Decode)
    }
}
