//! Axum route handlers for the Resume API.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::document::DOCX_CONTENT_TYPE;
use crate::errors::AppError;

use super::{generate, validate, ValidationResult};

/// Header carrying the number of non-blocking validation warnings.
pub const WARNINGS_HEADER: &str = "x-resume-warnings";

/// POST /api/v1/resumes/validate
///
/// Runs validation only. Returns the full result with 200 whether or not the
/// résumé is valid; only a body that is not a JSON object is rejected.
pub async fn handle_validate(Json(data): Json<Value>) -> Result<Json<ValidationResult>, AppError> {
    let result = validate(&data)?;
    info!(
        valid = result.is_valid,
        errors = result.summary.total_errors,
        warnings = result.summary.total_warnings,
        "Validated resume"
    );
    Ok(Json(result))
}

/// POST /api/v1/resumes/render
///
/// Validates and renders the résumé, returning the `.docx` package as an
/// attachment. Rendering is CPU-bound and runs on the blocking pool.
pub async fn handle_render(Json(data): Json<Value>) -> Result<Response, AppError> {
    let rendered = tokio::task::spawn_blocking(move || generate(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Render task failed: {e}")))??;

    let headers = [
        (header::CONTENT_TYPE.to_string(), DOCX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION.to_string(),
            format!(
                "attachment; filename=\"{}\"",
                download_filename(&rendered.full_name)
            ),
        ),
        (WARNINGS_HEADER.to_string(), rendered.warnings.len().to_string()),
    ];

    Ok((StatusCode::OK, headers, rendered.bytes).into_response())
}

/// `Jane Q. Smith` → `Jane_Q_Smith_Resume.docx`. Characters outside ASCII
/// alphanumerics, `-` and `_` are dropped so the value is header-safe.
pub fn download_filename(full_name: &str) -> String {
    let stem = full_name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        "Resume.docx".to_string()
    } else {
        format!("{stem}_Resume.docx")
    }
}
