//! Creative: purple/pink Trebuchet layout with sparkle-prefixed contact lines
//! and a diamond divider.

use crate::document::{Alignment, Document, DocumentError, PageMargins, Rgb};
use crate::models::resume::PersonalInfo;

use super::sections::{SectionColors, SectionContext};
use super::{present, ResumeTemplate, SectionKind, TemplateKind};

const PRIMARY: Rgb = Rgb::new(147, 51, 234);
const SECONDARY: Rgb = Rgb::new(219, 39, 119);
const ACCENT: Rgb = Rgb::new(59, 130, 246);
const TEXT: Rgb = Rgb::new(55, 65, 81);

const FONT: &str = "Trebuchet MS";

const NAME: &str = "Creative Name";
const TITLE: &str = "Creative Title";
const SECTION: &str = "Creative Section";
const CONTACT: &str = "Creative Contact";
const BODY: &str = "Creative Body";
const DIVIDER: &str = "Creative Divider";

const DIVIDER_GLYPHS: usize = 15;

pub struct Creative;

impl ResumeTemplate for Creative {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Creative
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
        PageMargins::inches(0.8, 0.8, 0.9, 0.9)
    }

    fn section_context(&self) -> SectionContext {
        SectionContext {
            kind: TemplateKind::Creative,
            heading_style: SECTION,
            body_style: BODY,
            colors: SectionColors {
                emphasis: PRIMARY,
                detail: SECONDARY,
                education: ACCENT,
                skills: PRIMARY,
            },
        }
    }

    fn register_styles(&self, doc: &mut Document) {
        doc.style(NAME)
            .font_size(30.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(FONT)
            .space_after(8.0);
        doc.style(TITLE)
            .font_size(14.0)
            .color(ACCENT)
            .font_name(FONT)
            .space_after(12.0);
        doc.style(SECTION)
            .font_size(15.0)
            .bold(true)
            .color(SECONDARY)
            .font_name(FONT)
            .space_before(18.0)
            .space_after(8.0);
        doc.style(CONTACT)
            .font_size(11.0)
            .font_name(FONT)
            .color(TEXT)
            .space_after(4.0);
        doc.style(DIVIDER)
            .color(PRIMARY)
            .align(Alignment::Center)
            .space_after(16.0);
        doc.style(BODY)
            .font_size(11.0)
            .font_name(FONT)
            .color(TEXT)
            .space_after(6.0);
    }

    fn build_header(&self, doc: &mut Document, info: &PersonalInfo) -> Result<(), DocumentError> {
        doc.add_text(NAME, info.full_name.as_str())?;
        if let Some(title) = &info.title {
            doc.add_text(TITLE, title.as_str())?;
        }

        for item in present(&[&info.email, &info.phone, &info.location, &info.portfolio]) {
            doc.add_text(CONTACT, format!("✦ {item}"))?;
        }

        doc.add_text(DIVIDER, divider())?;
        Ok(())
    }
}

/// Alternating filled and hollow diamonds: `◆ ◇ ◆ … ◆`.
fn divider() -> String {
    (0..DIVIDER_GLYPHS)
        .map(|i| if i % 2 == 0 { "◆" } else { "◇" })
        .collect::<Vec<_>>()
        .join(" ")
}
