//! Executive: centred Georgia layout for senior profiles, with an upper-cased
//! name and a heavy rule under the header.

use crate::document::{Alignment, Document, DocumentError, PageMargins, Rgb};
use crate::models::resume::PersonalInfo;

use super::sections::{SectionColors, SectionContext};
use super::{present, ResumeTemplate, SectionKind, TemplateKind};

const PRIMARY: Rgb = Rgb::new(17, 24, 39);
const ACCENT: Rgb = Rgb::new(139, 69, 19);
const SECONDARY: Rgb = Rgb::new(75, 85, 99);

const FONT: &str = "Georgia";

const NAME: &str = "Executive Name";
const TITLE: &str = "Executive Title";
const SECTION: &str = "Executive Section";
const CONTACT: &str = "Executive Contact";
const BORDER: &str = "Executive Border";
const BODY: &str = "Executive Body";

pub struct Executive;

impl ResumeTemplate for Executive {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Executive
    }

    // Credentials lead; strategic projects follow education.
    fn section_order(&self) -> &'static [SectionKind] {
        &[
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Projects,
            SectionKind::Skills,
        ]
    }

    fn margins(&self) -> PageMargins {
        PageMargins::inches(0.8, 0.8, 1.0, 1.0)
    }

    fn section_context(&self) -> SectionContext {
        SectionContext {
            kind: TemplateKind::Executive,
            heading_style: SECTION,
            body_style: BODY,
            colors: SectionColors {
                emphasis: PRIMARY,
                detail: ACCENT,
                education: SECONDARY,
                skills: ACCENT,
            },
        }
    }

    fn register_styles(&self, doc: &mut Document) {
        doc.style(NAME)
            .font_size(32.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(FONT)
            .space_after(6.0)
            .align(Alignment::Center);
        doc.style(TITLE)
            .font_size(16.0)
            .color(ACCENT)
            .font_name(FONT)
            .space_after(16.0)
            .align(Alignment::Center);
        doc.style(SECTION)
            .font_size(14.0)
            .bold(true)
            .color(ACCENT)
            .font_name(FONT)
            .space_before(24.0)
            .space_after(10.0);
        doc.style(CONTACT)
            .font_size(11.0)
            .font_name(FONT)
            .color(SECONDARY)
            .align(Alignment::Center)
            .space_after(4.0);
        doc.style(BORDER)
            .color(ACCENT)
            .align(Alignment::Center)
            .space_after(20.0);
        doc.style(BODY)
            .font_size(12.0)
            .font_name(FONT)
            .color(PRIMARY)
            .space_after(8.0);
    }

    fn build_header(&self, doc: &mut Document, info: &PersonalInfo) -> Result<(), DocumentError> {
        doc.add_text(NAME, info.full_name.to_uppercase())?;
        if let Some(title) = &info.title {
            doc.add_text(TITLE, title.as_str())?;
        }

        let contact = present(&[&info.email, &info.phone, &info.location, &info.linkedin]);
        if !contact.is_empty() {
            doc.add_text(CONTACT, contact.join(" | "))?;
        }

        doc.add_text(BORDER, "━".repeat(50))?;
        Ok(())
    }
}
