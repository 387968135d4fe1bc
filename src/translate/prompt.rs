use crate::completion::{ChatCompletionRequest, ChatMessage};
use crate::config::ModelConfig;

use super::language::language_name;

pub const TRANSLATION_SYSTEM_PROMPT: &str =
    "You are a professional translator that provides accurate and fluent translations between languages.";

pub fn translation_prompt(text: &str, from_lang: &str, to_lang: &str) -> String {
    let source = language_name(from_lang);
    let target = language_name(to_lang);
    format!(
        "Translate the following text from {source} to {target}.\n\
         Preserve the meaning, tone, and cultural context accurately.\n\
         Do not add any additional explanations or notes, just provide the translation.\n\
         \n\
         Text to translate: {text}"
    )
}

/// Free-form text request; no structured output is asked for
pub fn translation_completion_request(
    settings: &ModelConfig,
    text: &str,
    from_lang: &str,
    to_lang: &str,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: settings.model.clone(),
        messages: vec![
            ChatMessage::system(TRANSLATION_SYSTEM_PROMPT),
            ChatMessage::user(translation_prompt(text, from_lang, to_lang)),
        ],
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
        response_format: None,
    }
}
