use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub completion_config: CompletionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the upstream chat-completions API.
///
/// The API key itself is not part of the configuration; only the name of the
/// environment variable holding it is. It is looked up on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_quiz_model")]
    pub quiz: ModelConfig,
    #[serde(default = "default_translation_model")]
    pub translation: ModelConfig,
}

/// Per-handler sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8888
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_quiz_model() -> ModelConfig {
    ModelConfig {
        model: "llama3-8b-8192".to_string(),
        temperature: 0.5,
        max_tokens: 1024,
    }
}

fn default_translation_model() -> ModelConfig {
    ModelConfig {
        model: "meta-llama/llama-4-maverick-17b-128e-instruct".to_string(),
        temperature: 0.3,
        max_tokens: 2000,
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            quiz: default_quiz_model(),
            translation: default_translation_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_groq() {
        let config = Config::default();
        assert_eq!(config.system_config.port, 8888);
        assert_eq!(config.completion_config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.completion_config.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.completion_config.quiz.model, "llama3-8b-8192");
        assert_eq!(config.completion_config.quiz.max_tokens, 1024);
        assert_eq!(config.completion_config.translation.temperature, 0.3);
        assert_eq!(config.completion_config.translation.max_tokens, 2000);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = r#"
system_config:
  port: 9000
completion_config:
  translation:
    model: llama-3.3-70b-versatile
    temperature: 0.2
    max_tokens: 512
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.completion_config.translation.model, "llama-3.3-70b-versatile");
        assert_eq!(config.completion_config.quiz, default_quiz_model());
    }

    #[test]
    fn load_picks_parser_by_extension() {
        let dir = std::env::temp_dir().join(format!("qtb-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();

        let json_path = dir.join("conf.json");
        fs::write(&json_path, r#"{"completion_config": {"api_key_env": "MY_KEY"}}"#).unwrap();
        let config = Config::load(json_path.to_str().unwrap()).unwrap();
        assert_eq!(config.completion_config.api_key_env, "MY_KEY");

        let yaml_path = dir.join("conf.yaml");
        fs::write(&yaml_path, "completion_config:\n  base_url: http://localhost:1234/v1\n").unwrap();
        let config = Config::load(yaml_path.to_str().unwrap()).unwrap();
        assert_eq!(config.completion_config.base_url, "http://localhost:1234/v1");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_fails_for_missing_file() {
        assert!(Config::load("/nonexistent/conf.yaml").is_err());
    }
}
