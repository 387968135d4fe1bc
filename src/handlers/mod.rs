pub mod quiz;
pub mod translate;

pub use quiz::generate_quiz;
pub use translate::translate_text;

use axum::http::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::HandlerError;

pub(crate) fn ensure_post(method: &Method) -> Result<(), HandlerError> {
    if *method == Method::POST {
        Ok(())
    } else {
        Err(HandlerError::MethodNotAllowed)
    }
}

/// Parse a JSON request body. A blank body counts as `{}` so it falls through
/// to the required-field checks.
pub(crate) fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        debug!("Rejecting request body: {}", e);
        HandlerError::BadRequest("Invalid JSON body".to_string())
    })
}

/// Empty strings count as missing
pub(crate) fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
