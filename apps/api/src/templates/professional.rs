//! Professional: navy serif layout with a two-line contact block.

use crate::document::{Document, DocumentError, PageMargins, Rgb};
use crate::models::resume::PersonalInfo;

use super::sections::{SectionColors, SectionContext};
use super::{present, ResumeTemplate, SectionKind, TemplateKind};

const PRIMARY: Rgb = Rgb::new(0, 51, 102);
const SECONDARY: Rgb = Rgb::new(102, 102, 102);

const FONT: &str = "Times New Roman";

const NAME: &str = "Pro Name";
const SECTION: &str = "Pro Section";
const CONTACT: &str = "Pro Contact";
const BODY: &str = "Pro Body";

pub struct Professional;

impl ResumeTemplate for Professional {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Professional
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
        PageMargins::inches(0.75, 0.75, 1.0, 1.0)
    }

    fn section_context(&self) -> SectionContext {
        SectionContext {
            kind: TemplateKind::Professional,
            heading_style: SECTION,
            body_style: BODY,
            colors: SectionColors {
                emphasis: PRIMARY,
                detail: SECONDARY,
                education: SECONDARY,
                skills: PRIMARY,
            },
        }
    }

    fn register_styles(&self, doc: &mut Document) {
        doc.style(NAME)
            .font_size(26.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(FONT)
            .space_after(6.0);
        doc.style(SECTION)
            .font_size(14.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(FONT)
            .space_before(16.0)
            .space_after(8.0);
        doc.style(CONTACT)
            .font_size(11.0)
            .font_name(FONT)
            .color(SECONDARY)
            .space_after(4.0);
        doc.style(BODY).font_size(11.0).font_name(FONT).space_after(6.0);
    }

    fn build_header(&self, doc: &mut Document, info: &PersonalInfo) -> Result<(), DocumentError> {
        doc.add_text(NAME, info.full_name.as_str())?;

        let reach = present(&[&info.email, &info.phone]);
        let whereabouts = present(&[&info.location, &info.linkedin]);
        for line in [reach, whereabouts] {
            if !line.is_empty() {
                doc.add_text(CONTACT, line.join(" • "))?;
            }
        }
        Ok(())
    }
}
