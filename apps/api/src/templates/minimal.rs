//! Minimal: compact grey Arial layout with pipe-separated contact lines.

use crate::document::{Document, DocumentError, PageMargins, Rgb};
use crate::models::resume::PersonalInfo;

use super::sections::{SectionColors, SectionContext};
use super::{present, ResumeTemplate, SectionKind, TemplateKind};

const PRIMARY: Rgb = Rgb::new(64, 64, 64);
const SECONDARY: Rgb = Rgb::new(128, 128, 128);

const FONT: &str = "Arial";

const NAME: &str = "Minimal Name";
const SECTION: &str = "Minimal Section";
const CONTACT: &str = "Minimal Contact";
const BODY: &str = "Minimal Body";

pub struct Minimal;

impl ResumeTemplate for Minimal {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Minimal
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
        PageMargins::inches(0.5, 0.5, 0.75, 0.75)
    }

    fn section_context(&self) -> SectionContext {
        SectionContext {
            kind: TemplateKind::Minimal,
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
            .font_size(24.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(FONT)
            .space_after(8.0);
        doc.style(SECTION)
            .font_size(12.0)
            .bold(true)
            .color(PRIMARY)
            .font_name(FONT)
            .space_before(14.0)
            .space_after(6.0);
        doc.style(CONTACT)
            .font_size(10.0)
            .font_name(FONT)
            .color(SECONDARY)
            .space_after(2.0);
        doc.style(BODY).font_size(10.0).font_name(FONT).space_after(4.0);
    }

    fn build_header(&self, doc: &mut Document, info: &PersonalInfo) -> Result<(), DocumentError> {
        doc.add_text(NAME, info.full_name.as_str())?;

        let contact = present(&[&info.email, &info.phone, &info.location]);
        let links = present(&[&info.linkedin, &info.portfolio]);
        for line in [contact, links] {
            if !line.is_empty() {
                doc.add_text(CONTACT, line.join(" | "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::make_full_resume;

    #[test]
    fn test_contact_and_links_lines() {
        let data = make_full_resume();
        let mut doc = Document::new();
        Minimal.register_styles(&mut doc);
        Minimal.build_header(&mut doc, &data.personal_info).unwrap();

        let texts: Vec<String> = doc.paragraphs().iter().map(|p| p.text()).collect();
        assert_eq!(
            texts,
            vec![
                "John Doe",
                "john.doe@email.com | (555) 123-4567 | San Francisco, CA",
                "https://linkedin.com/in/johndoe | https://johndoe.dev",
            ]
        );
    }
}
