use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::resume::{ResumeError, ValidationFailure};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The résumé broke at least one blocking rule.
    #[error("{0}")]
    InvalidResume(ValidationFailure),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ResumeError> for AppError {
    fn from(err: ResumeError) -> Self {
        match err {
            ResumeError::MissingData => AppError::BadRequest(err.to_string()),
            ResumeError::Validation(failure) => AppError::InvalidResume(failure),
            ResumeError::Build { .. } | ResumeError::Serialize(_) => {
                AppError::Generation(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details = Map::new();
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidResume(failure) => {
                let summary = &failure.result.summary;
                details.insert("errors".into(), json!(failure.errors()));
                details.insert("warnings".into(), json!(failure.warnings()));
                details.insert("summary".into(), json!(summary));
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_FAILED",
                    format!(
                        "Resume failed validation: {} errors, {} warnings",
                        summary.total_errors, summary.total_warnings
                    ),
                )
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    msg.clone(),
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

        let mut error = Map::new();
        error.insert("code".into(), Value::from(code));
        error.insert("message".into(), Value::from(message));
        error.extend(details);

        (status, Json(json!({ "error": error }))).into_response()
    }
}
