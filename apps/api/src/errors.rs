use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assistant::service::AssistantError;
use crate::export::docx::DocxError;
use crate::export::snapshot::SnapshotError;
use crate::export::ArtifactError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every failure is scoped to the request that triggered it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error("DOCX export failed: {0}")]
    Docx(#[from] DocxError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Snapshot(e) => (StatusCode::CONFLICT, "NOTHING_TO_EXPORT", e.to_string()),
            AppError::Assistant(AssistantError::MissingInput(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.to_string())
            }
            AppError::Assistant(e) => {
                tracing::error!("AI service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "AI_SERVICE_ERROR",
                    "The AI assistant could not complete the request".to_string(),
                )
            }
            AppError::Docx(e) => {
                tracing::error!("DOCX export error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "The document could not be generated".to_string(),
                )
            }
            AppError::Artifact(e) => {
                tracing::error!("Artifact write error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "The exported file could not be saved".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Snapshot(SnapshotError::NothingMounted), StatusCode::CONFLICT),
            (
                AppError::Assistant(AssistantError::MissingInput("need a title")),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Assistant(AssistantError::Service(LlmError::NotConfigured)),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Docx(DocxError::Xml("bad".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
