use serde::{Deserialize, Serialize};

/// Body accepted by the quiz endpoint
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub topic: Option<String>,
}
