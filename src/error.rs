use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn, Level};

use crate::completion::CompletionError;

/// Everything that can stop a handler before it produces its payload
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("API key not configured")]
    MissingConfiguration,

    #[error("{0}")]
    BadRequest(String),

    #[error("API request failed with status {status}{}", body_suffix(.body))]
    UpstreamRequestFailed { status: u16, body: Option<String> },

    #[error("No content received from the API.")]
    EmptyUpstreamContent,

    #[error("Upstream returned malformed JSON: {0}")]
    MalformedUpstreamResponse(#[source] serde_json::Error),

    #[error(transparent)]
    Unknown(CompletionError),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref().map(|b| format!(": {b}")).unwrap_or_default()
}

impl From<CompletionError> for HandlerError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Status { status, body } => HandlerError::UpstreamRequestFailed {
                status,
                body: Some(body),
            },
            other => HandlerError::Unknown(other),
        }
    }
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            HandlerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HandlerError::MissingConfiguration
            | HandlerError::UpstreamRequestFailed { .. }
            | HandlerError::EmptyUpstreamContent
            | HandlerError::MalformedUpstreamResponse(_)
            | HandlerError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client errors are warnings; every 5xx is logged as an error
    pub fn log_level(&self) -> Level {
        if self.status().is_server_error() {
            Level::ERROR
        } else {
            Level::WARN
        }
    }

    /// Attach the endpoint that decides how the failure is rendered
    pub fn at(self, endpoint: Endpoint) -> ApiError {
        ApiError {
            endpoint,
            error: self,
        }
    }
}

/// The two public handlers. Their failure bodies differ: the quiz endpoint
/// echoes the error message as `details`, the translation endpoint does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Quiz,
    Translate,
}

impl Endpoint {
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Quiz => "quiz",
            Endpoint::Translate => "translate",
        }
    }

    fn failure_summary(self) -> &'static str {
        match self {
            Endpoint::Quiz => "Failed to generate quiz",
            Endpoint::Translate => "Failed to translate text",
        }
    }

    fn echoes_details(self) -> bool {
        matches!(self, Endpoint::Quiz)
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub endpoint: Endpoint,
    pub error: HandlerError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let status = self.error.status();
        let endpoint = self.endpoint.name();

        if self.error.log_level() == Level::ERROR {
            error!(endpoint, status = status.as_u16(), "Request failed: {}", self.error);
        } else {
            warn!(endpoint, status = status.as_u16(), "Rejected request: {}", self.error);
        }

        let body = match &self.error {
            HandlerError::MethodNotAllowed
            | HandlerError::MissingConfiguration
            | HandlerError::BadRequest(_) => ErrorResponse {
                error: self.error.to_string(),
                details: None,
            },
            _ => ErrorResponse {
                error: self.endpoint.failure_summary().to_string(),
                details: self
                    .endpoint
                    .echoes_details()
                    .then(|| self.error.to_string()),
            },
        };

        (status, Json(body)).into_response()
    }
}
