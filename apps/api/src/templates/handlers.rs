//! Axum route handlers for the template catalogue.

use axum::{extract::Path, Json};

use crate::errors::AppError;

use super::{TemplateDescriptor, TemplateKind};

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateDescriptor>> {
    Json(TemplateKind::ALL.into_iter().map(TemplateDescriptor::of).collect())
}

/// GET /api/v1/templates/:name
///
/// Name matching ignores case, as it does for rendering.
pub async fn handle_get_template(
    Path(name): Path<String>,
) -> Result<Json<TemplateDescriptor>, AppError> {
    TemplateKind::from_name(&name)
        .map(|kind| Json(TemplateDescriptor::of(kind)))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Template '{name}' does not exist. Available templates: {}",
                TemplateKind::available_names()
            ))
        })
}
