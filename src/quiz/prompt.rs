use crate::completion::{ChatCompletionRequest, ChatMessage, ResponseFormat};
use crate::config::ModelConfig;

pub const QUIZ_SYSTEM_PROMPT: &str =
    "You are an AI assistant that generates multiple-choice quizzes in a specific JSON format.";

/// Instruction asking for five four-option questions as `{"quiz": [...]}`.
/// The topic is embedded verbatim.
pub fn quiz_prompt(topic: &str) -> String {
    format!(
        "Generate a multiple-choice quiz on the topic \"{topic}\".\n\
         Provide 5 questions.\n\
         Return the quiz as a JSON object with a single key \"quiz\" which is an array of objects.\n\
         Each object in the array should have three keys: \"question\", \"options\" (an array of 4 strings), \
         and \"answer\" (a string with the correct answer).\n\
         Do not include any other text or explanations, just the JSON object."
    )
}

pub fn quiz_completion_request(settings: &ModelConfig, topic: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: settings.model.clone(),
        messages: vec![
            ChatMessage::system(QUIZ_SYSTEM_PROMPT),
            ChatMessage::user(quiz_prompt(topic)),
        ],
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
        response_format: Some(ResponseFormat::json_object()),
    }
}
