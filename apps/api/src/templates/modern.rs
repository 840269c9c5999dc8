//! Modern: contemporary sans-serif layout with a blue/emerald palette and
//! icon-prefixed contact rows.

use crate::document::{Alignment, Document, DocumentError, PageMargins, Rgb};
use crate::models::resume::PersonalInfo;

use super::sections::{SectionColors, SectionContext};
use super::{ResumeTemplate, SectionKind, TemplateKind};

const PRIMARY: Rgb = Rgb::new(37, 99, 235);
const SECONDARY: Rgb = Rgb::new(71, 85, 105);
const ACCENT: Rgb = Rgb::new(16, 185, 129);
const TEXT: Rgb = Rgb::new(30, 41, 59);

const FONT: &str = "Segoe UI";

const NAME: &str = "Modern Name";
const TITLE: &str = "Modern Title";
const SECTION: &str = "Modern Section";
const CONTACT: &str = "Modern Contact";
const BODY: &str = "Modern Body";
const SEPARATOR: &str = "Modern Separator";

/// Contact items on the first row; the rest wrap to a second row.
const FIRST_ROW: usize = 3;

pub struct Modern;

impl ResumeTemplate for Modern {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Modern
    }

    fn section_order(&self) -> &'static [SectionKind] {
        &[
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Projects,
            SectionKind::Education,
            SectionKind::Skills,
        ]
    }

    fn margins(&self) -> PageMargins {
        PageMargins::inches(0.7, 0.7, 0.8, 0.8)
    }

    fn section_context(&self) -> SectionContext {
        SectionContext {
            kind: TemplateKind::Modern,
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
            .font_size(28.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(FONT)
            .space_after(4.0)
            .align(Alignment::Left);
        doc.style(TITLE)
            .font_size(14.0)
            .color(SECONDARY)
            .font_name(FONT)
            .space_after(12.0);
        doc.style(SECTION)
            .font_size(16.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(FONT)
            .space_before(20.0)
            .space_after(8.0);
        doc.style(CONTACT)
            .font_size(11.0)
            .font_name(FONT)
            .color(SECONDARY)
            .space_after(3.0);
        doc.style(BODY)
            .font_size(11.0)
            .font_name(FONT)
            .color(TEXT)
            .space_after(6.0);
        doc.style(SEPARATOR).color(ACCENT).space_after(16.0);
    }

    fn build_header(&self, doc: &mut Document, info: &PersonalInfo) -> Result<(), DocumentError> {
        doc.add_text(NAME, info.full_name.as_str())?;
        if let Some(title) = &info.title {
            doc.add_text(TITLE, title.as_str())?;
        }
        add_contact(doc, info)?;
        doc.add_text(SEPARATOR, "─".repeat(60))?;
        Ok(())
    }
}

fn add_contact(doc: &mut Document, info: &PersonalInfo) -> Result<(), DocumentError> {
    let items: Vec<String> = [
        ("✉", &info.email),
        ("📞", &info.phone),
        ("📍", &info.location),
        ("💼", &info.linkedin),
        ("🌐", &info.portfolio),
        ("💻", &info.github),
    ]
    .into_iter()
    .filter_map(|(icon, value)| value.as_deref().map(|v| format!("{icon} {v}")))
    .collect();

    let (first, second) = items.split_at(items.len().min(FIRST_ROW));
    for row in [first, second] {
        let Some((lead, rest)) = row.split_first() else {
            continue;
        };
        let paragraph = doc.add_text(CONTACT, lead.as_str())?;
        for item in rest {
            paragraph.add_run(format!(" • {item}"))?;
        }
    }
    Ok(())
}
