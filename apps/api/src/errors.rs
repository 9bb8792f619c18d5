use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file in request")]
    FileNotFound,

    #[error("Resume file exceeds {limit_bytes} bytes")]
    FileTooLarge { limit_bytes: usize },

    #[error("Unsupported resume file type: {0}")]
    FileTypeNotSupported(String),

    #[error("LLM returned no response")]
    NoResponse,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::FileNotFound => "FILE_NOT_FOUND",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::FileTypeNotSupported(_) => "FILE_TYPE_NOT_SUPPORTED",
            AppError::NoResponse => "NO_RESPONSE_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Cache(_) => "CACHE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::FileNotFound => (
                StatusCode::BAD_REQUEST,
                "Nenhum arquivo enviado".to_string(),
            ),
            AppError::FileTooLarge { limit_bytes } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!(
                    "O arquivo enviado excede o limite de {}MB",
                    limit_bytes / (1024 * 1024)
                ),
            ),
            AppError::FileTypeNotSupported(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "O tipo de arquivo enviado não é suportado".to_string(),
            ),
            AppError::NoResponse => {
                tracing::error!("LLM returned no text for an extraction");
                (
                    StatusCode::BAD_GATEWAY,
                    "Nenhuma resposta encontrada".to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Cache(e) => {
                tracing::error!("Cache error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A cache error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
