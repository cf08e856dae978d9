use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Shown to the user for every failed generation, whatever the root cause.
pub const GENERATION_FAILED_MESSAGE: &str = "We encountered an error contacting the AI architect. \
    Please ensure you have selected a valid API Key with billing enabled for Gemini Pro Image models.";

const MISSING_KEY_MESSAGE: &str = "No Gemini API key is configured. \
    Set GEMINI_API_KEY (or API_KEY) and try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API credential missing")]
    MissingCredential,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Unparseable LLM response: {0}")]
    LlmParse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingCredential => {
                tracing::warn!("Generation rejected: no API credential configured");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CONFIGURATION_ERROR",
                    MISSING_KEY_MESSAGE.to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    GENERATION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::LlmParse(msg) => {
                tracing::error!("LLM response could not be parsed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_RESPONSE_UNPARSEABLE",
                    GENERATION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
