use std::sync::Arc;

use crate::completion::{CompletionClient, OpenAICompatibleClient};
use crate::config::Config;
use crate::error::HandlerError;

/// Shared, read-only per-process state. Handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let completion = Arc::new(OpenAICompatibleClient::new(
            http,
            config.completion_config.base_url.clone(),
        ));

        Ok(Self::with_client(config, completion))
    }

    pub fn with_client(config: Config, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            config: Arc::new(config),
            completion,
        }
    }

    /// Read the completion API key from the environment. This happens on
    /// every request so the key can be set or rotated without a restart.
    pub fn api_key(&self) -> Result<String, HandlerError> {
        std::env::var(&self.config.completion_config.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(HandlerError::MissingConfiguration)
    }
}
