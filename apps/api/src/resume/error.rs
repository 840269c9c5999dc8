use std::fmt;

use thiserror::Error;

use crate::document::DocumentError;
use crate::templates::TemplateKind;

use super::validator::ValidationResult;

/// Failure modes of résumé validation and generation.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// Input is absent or not a JSON object. Never reaches the content rules.
    #[error("No data provided for resume generation")]
    MissingData,

    #[error("{0}")]
    Validation(ValidationFailure),

    #[error("Resume generation failed: {template} template could not be built: {source}")]
    Build {
        template: TemplateKind,
        #[source]
        source: DocumentError,
    },

    #[error("Resume generation failed: document could not be serialized: {0}")]
    Serialize(#[source] DocumentError),
}

/// A validation run that reported at least one blocking error. Carries the
/// whole result so every error and warning can be presented at once.
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    pub result: ValidationResult,
}

impl ValidationFailure {
    pub fn errors(&self) -> &[String] {
        &self.result.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.result.warnings
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resume generation failed due to validation errors:")?;
        writeln!(f)?;
        writeln!(f, "ERRORS:")?;
        for (i, error) in self.result.errors.iter().enumerate() {
            writeln!(f, "{}. {error}", i + 1)?;
        }

        if !self.result.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "WARNINGS:")?;
            for (i, warning) in self.result.warnings.iter().enumerate() {
                writeln!(f, "{}. {warning}", i + 1)?;
            }
        }

        writeln!(f)?;
        write!(
            f,
            "Validation Summary: {} errors, {} warnings",
            self.result.summary.total_errors, self.result.summary.total_warnings
        )
    }
}
