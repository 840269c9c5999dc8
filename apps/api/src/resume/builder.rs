//! Generation entry point: validate, build with the selected template, serialize.

use bytes::Bytes;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::document::Document;
use crate::models::resume::ResumeData;
use crate::templates::TemplateKind;

use super::error::{ResumeError, ValidationFailure};
use super::format::lookup;
use super::validator::validate;

/// A successfully generated résumé.
#[derive(Debug, Clone)]
pub struct RenderedResume {
    pub template: TemplateKind,
    /// Serialized `.docx` package.
    pub bytes: Bytes,
    /// Non-blocking findings from validation.
    pub warnings: Vec<String>,
    /// Full name from the input, used to name the download.
    pub full_name: String,
}

/// Validates `data` and renders it with the requested template.
///
/// Fails fast with [`ResumeError::Validation`] when any blocking rule is
/// violated; nothing is built in that case. Failures while populating the
/// template are reported as [`ResumeError::Build`] with the template name.
pub fn generate(data: &Value) -> Result<RenderedResume, ResumeError> {
    let template = resolve_template(data);
    info!(template = %template, "Starting resume generation");

    let result = validate(data)?;
    if !result.is_valid {
        warn!(
            template = %template,
            errors = result.summary.total_errors,
            warnings = result.summary.total_warnings,
            "Resume failed validation"
        );
        return Err(ResumeError::Validation(ValidationFailure { result }));
    }

    for (i, warning) in result.warnings.iter().enumerate() {
        warn!("Validation warning {}: {warning}", i + 1);
    }

    let resume = ResumeData::from_value(data);
    let mut doc = Document::new();
    template
        .template()
        .build(&mut doc, &resume)
        .map_err(|source| {
            error!(template = %template, "Template build failed: {source}");
            ResumeError::Build { template, source }
        })?;

    let bytes = doc.to_bytes().map_err(|e| {
        error!(template = %template, "Document serialization failed: {e}");
        ResumeError::Serialize(e)
    })?;

    info!(
        template = %template,
        size = bytes.len(),
        "Resume generated successfully"
    );

    Ok(RenderedResume {
        template,
        bytes: Bytes::from(bytes),
        warnings: result.warnings,
        full_name: resume.personal_info.full_name,
    })
}

/// The requested template, or Modern when none is named or the name is unknown.
/// An unknown name never reaches the builder because validation rejects it.
pub fn resolve_template(data: &Value) -> TemplateKind {
    lookup(data, "template")
        .and_then(Value::as_str)
        .and_then(TemplateKind::from_name)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentError;
    use serde_json::json;

    fn make_resume(template: &str) -> Value {
        json!({
            "template": template,
            "personal_info": {
                "full_name": "Priya Natarajan",
                "title": "Data Engineer",
                "email": "priya@example.com",
                "phone": "+44 20 7946 0958",
                "location": "London, UK",
                "github": "https://github.com/priyan"
            },
            "summary": "Data engineer focused on streaming pipelines, data quality and cost-efficient warehousing.",
            "experience": [{
                "position": "Data Engineer",
                "company": "Streamline",
                "start_date": "2021-04",
                "end_date": "current",
                "responsibilities": "Built Kafka ingestion\nCut warehouse spend by 30%"
            }],
            "projects": [{
                "name": "dq-lint",
                "description": "Schema drift detector",
                "technologies": "Rust, Arrow",
                "features": ["CLI", "CI integration"]
            }],
            "skills": { "technical": "Rust, SQL, Kafka", "tools": ["dbt", "Airflow"] }
        })
    }

    #[test]
    fn test_generate_modern_returns_docx_bytes() {
        let rendered = generate(&make_resume("Modern")).unwrap();
        assert_eq!(rendered.template, TemplateKind::Modern);
        assert!(rendered.bytes.starts_with(b"PK"));
        assert_eq!(rendered.full_name, "Priya Natarajan");
    }

    #[test]
    fn test_generate_every_template() {
        for kind in TemplateKind::ALL {
            let rendered = generate(&make_resume(kind.name())).unwrap();
            assert_eq!(rendered.template, kind);
            assert!(!rendered.bytes.is_empty(), "{kind} produced an empty buffer");
        }
    }

    #[test]
    fn test_template_name_is_case_normalized() {
        let rendered = generate(&make_resume("creative")).unwrap();
        assert_eq!(rendered.template, TemplateKind::Creative);
    }

    #[test]
    fn test_unknown_template_refuses_generation() {
        let failure = match generate(&make_resume("Nonexistent")) {
            Err(ResumeError::Validation(failure)) => failure,
            other => panic!("expected a validation failure, got {other:?}"),
        };
        assert!(failure.errors()[0].contains(
            "Available templates: Modern, Professional, Minimal, Creative, Executive, Tech"
        ));
        assert!(failure.to_string().contains("Validation Summary: 1 errors"));
    }

    #[test]
    fn test_missing_template_defaults_to_modern_but_fails_validation() {
        let mut data = make_resume("Modern");
        data.as_object_mut().unwrap().remove("template");
        assert_eq!(resolve_template(&data), TemplateKind::Modern);
        assert!(matches!(generate(&data), Err(ResumeError::Validation(_))));
    }

    #[test]
    fn test_warnings_are_returned_with_success() {
        let mut data = make_resume("Tech");
        data["summary"] = json!("Too short.");
        let rendered = generate(&data).unwrap();
        assert_eq!(
            rendered.warnings,
            vec!["Professional summary is quite short - consider expanding to 2-3 sentences"]
        );
    }

    #[test]
    fn test_control_characters_fail_the_build() {
        let mut data = make_resume("Professional");
        data["personal_info"]["full_name"] = json!("Ada\u{0001}\u{000B} Lovelace");

        match generate(&data) {
            Err(ResumeError::Build { template, source }) => {
                assert_eq!(template, TemplateKind::Professional);
                assert!(matches!(source, DocumentError::InvalidText(_)));
            }
            other => panic!("expected a build failure, got {other:?}"),
        }
    }

    #[test]
    fn test_multiline_summary_still_renders() {
        let mut data = make_resume("Minimal");
        data["summary"] =
            json!("Data engineer focused on streaming pipelines.\nPreviously analytics.");
        let rendered = generate(&data).unwrap();
        assert!(rendered.bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_non_object_input_is_rejected() {
        assert!(matches!(generate(&json!(null)), Err(ResumeError::MissingData)));
    }
}
