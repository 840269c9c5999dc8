//! Tech: monospace, code-comment styled layout for engineers. Skills are
//! listed ahead of education.

use crate::document::{Document, DocumentError, PageMargins, Rgb};
use crate::models::resume::PersonalInfo;

use super::sections::{SectionColors, SectionContext};
use super::{ResumeTemplate, SectionKind, TemplateKind};

const PRIMARY: Rgb = Rgb::new(34, 197, 94);
const SECONDARY: Rgb = Rgb::new(71, 85, 105);
const ACCENT: Rgb = Rgb::new(59, 130, 246);
const DARK: Rgb = Rgb::new(15, 23, 42);

const MONO: &str = "Consolas";
const BODY_FONT: &str = "Calibri";

const NAME: &str = "Tech Name";
const TITLE: &str = "Tech Title";
const SECTION: &str = "Tech Section";
const CONTACT: &str = "Tech Contact";
const BODY: &str = "Tech Body";

pub struct Tech;

impl ResumeTemplate for Tech {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Tech
    }

    fn section_order(&self) -> &'static [SectionKind] {
        &[
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Projects,
            SectionKind::Skills,
            SectionKind::Education,
        ]
    }

    fn margins(&self) -> PageMargins {
        PageMargins::inches(0.6, 0.6, 0.8, 0.8)
    }

    fn section_context(&self) -> SectionContext {
        SectionContext {
            kind: TemplateKind::Tech,
            heading_style: SECTION,
            body_style: BODY,
            colors: SectionColors {
                emphasis: PRIMARY,
                detail: ACCENT,
                education: SECONDARY,
                skills: PRIMARY,
            },
        }
    }

    fn register_styles(&self, doc: &mut Document) {
        doc.style(NAME)
            .font_size(26.0)
            .bold(true)
            .color(DARK)
            .font_name(MONO)
            .space_after(4.0);
        doc.style(SECTION)
            .font_size(14.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(MONO)
            .space_before(18.0)
            .space_after(8.0);
        doc.style(TITLE)
            .font_size(13.0)
            .color(SECONDARY)
            .font_name(MONO)
            .space_after(12.0);
        doc.style(CONTACT)
            .font_size(10.0)
            .font_name(MONO)
            .color(ACCENT)
            .space_after(3.0);
        doc.style(BODY)
            .font_size(11.0)
            .font_name(BODY_FONT)
            .color(DARK)
            .space_after(6.0);
    }

    fn build_header(&self, doc: &mut Document, info: &PersonalInfo) -> Result<(), DocumentError> {
        doc.add_text(NAME, format!("// {}", info.full_name))?;
        if let Some(title) = &info.title {
            doc.add_text(TITLE, format!("/* {title} */"))?;
        }

        let fields = [
            ("email", &info.email),
            ("phone", &info.phone),
            ("github", &info.github),
            ("linkedin", &info.linkedin),
            ("portfolio", &info.portfolio),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                doc.add_text(CONTACT, format!("{label}: {value}"))?;
            }
        }
        Ok(())
    }
}
