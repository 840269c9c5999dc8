//! Visual templates.
//!
//! The registry is the closed [`TemplateKind`] enumeration. Each variant maps
//! to one [`ResumeTemplate`] implementation that owns its palette, typefaces,
//! header layout, section order and page margins. Content sections are
//! written by the shared renderers in [`sections`].

mod creative;
mod executive;
pub mod handlers;
mod minimal;
mod modern;
mod professional;
pub mod sections;
mod tech;
pub mod vocabulary;

use std::fmt;

use serde::Serialize;

use crate::document::{Document, DocumentError, PageMargins};
use crate::models::resume::{PersonalInfo, ResumeData};

use sections::{render_section, SectionContext};
pub use vocabulary::SectionKind;

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TemplateKind {
    #[default]
    Modern,
    Professional,
    Minimal,
    Creative,
    Executive,
    Tech,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::Modern,
        TemplateKind::Professional,
        TemplateKind::Minimal,
        TemplateKind::Creative,
        TemplateKind::Executive,
        TemplateKind::Tech,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "Modern",
            TemplateKind::Professional => "Professional",
            TemplateKind::Minimal => "Minimal",
            TemplateKind::Creative => "Creative",
            TemplateKind::Executive => "Executive",
            TemplateKind::Tech => "Tech",
        }
    }

    /// Resolves a template name, ignoring surrounding whitespace and case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Comma-separated list of every registered template name.
    pub fn available_names() -> String {
        Self::ALL
            .iter()
            .map(TemplateKind::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn template(&self) -> &'static dyn ResumeTemplate {
        match self {
            TemplateKind::Modern => &modern::Modern,
            TemplateKind::Professional => &professional::Professional,
            TemplateKind::Minimal => &minimal::Minimal,
            TemplateKind::Creative => &creative::Creative,
            TemplateKind::Executive => &executive::Executive,
            TemplateKind::Tech => &tech::Tech,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template interface
// ────────────────────────────────────────────────────────────────────────────

/// One visual style applied to the canonical résumé model.
pub trait ResumeTemplate: Send + Sync {
    fn kind(&self) -> TemplateKind;

    /// Content sections in the order this template renders them.
    fn section_order(&self) -> &'static [SectionKind];

    /// Page margins, in the order top, bottom, left, right.
    fn margins(&self) -> PageMargins;

    /// Styles, colours and vocabulary handed to the section renderers.
    fn section_context(&self) -> SectionContext;

    /// Defines every named style the template uses.
    fn register_styles(&self, doc: &mut Document);

    /// Name, optional title, contact block and any decorative separator.
    fn build_header(&self, doc: &mut Document, info: &PersonalInfo)
        -> Result<(), DocumentError>;

    fn render_sections(&self, doc: &mut Document, data: &ResumeData) -> Result<(), DocumentError> {
        let ctx = self.section_context();
        for &section in self.section_order() {
            render_section(section, doc, data, &ctx)?;
        }
        Ok(())
    }

    fn apply_margins(&self, doc: &mut Document) {
        doc.set_margins(self.margins());
    }

    /// Populates `doc` end to end.
    fn build(&self, doc: &mut Document, data: &ResumeData) -> Result<(), DocumentError> {
        self.register_styles(doc);
        self.build_header(doc, &data.personal_info)?;
        self.render_sections(doc, data)?;
        self.apply_margins(doc);
        Ok(())
    }
}

/// Serializable summary of a template, used by the templates endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub sections: Vec<SectionKind>,
    pub margins_in: MarginsInches,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarginsInches {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl TemplateDescriptor {
    pub fn of(kind: TemplateKind) -> Self {
        let template = kind.template();
        let margins = template.margins();
        TemplateDescriptor {
            name: kind.name(),
            sections: template.section_order().to_vec(),
            margins_in: MarginsInches {
                top: margins.top.as_inches(),
                bottom: margins.bottom.as_inches(),
                left: margins.left.as_inches(),
                right: margins.right.as_inches(),
            },
        }
    }
}

/// Collects the non-empty values of `fields`, in order.
pub(crate) fn present<'a>(fields: &[&'a Option<String>]) -> Vec<&'a str> {
    fields.iter().filter_map(|f| (*f).as_deref()).collect()
}
