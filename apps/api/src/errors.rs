use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::plan::normalizer::NormalizationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream timed out after {0}ms")]
    Timeout(u128),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Normalization error: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout(bound) => AppError::Timeout(bound.as_millis()),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl AppError {
    /// Short classification used in request logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Timeout(_) => "timeout",
            AppError::Upstream(_) => "upstream",
            AppError::Normalization(_) => "normalization",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Timeout(ms) => {
                tracing::error!("Upstream call exceeded {ms}ms");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Plan generation timed out".to_string(),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Plan generation failed".to_string(),
                )
            }
            // Raw model output is logged where the failure happens, never echoed here.
            AppError::Normalization(e) => {
                tracing::error!("Normalization error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Plan generation failed".to_string(),
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
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}
