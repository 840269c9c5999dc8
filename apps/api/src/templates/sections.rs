//! Content-section renderers shared by every template.
//!
//! Each renderer writes nothing when its section is empty. Otherwise it
//! writes one title paragraph followed by one block per item (or per skill
//! category), using the template's vocabulary for titles, bullets and labels.

use crate::document::{Document, DocumentError, Length, Rgb};
use crate::models::resume::{ResumeData, Skills};

use super::vocabulary::{vocabulary, SectionKind};
use super::TemplateKind;

/// Left indent for bullet and skill-list paragraphs.
const LIST_INDENT_IN: f32 = 0.25;

/// Colour tokens a template hands to the section renderers.
#[derive(Debug, Clone, Copy)]
pub struct SectionColors {
    /// Item headlines: position, project name.
    pub emphasis: Rgb,
    /// Secondary lines: dates, locations, technologies, links.
    pub detail: Rgb,
    pub education: Rgb,
    pub skills: Rgb,
}

/// Everything a renderer needs besides the document and the data.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext {
    pub kind: TemplateKind,
    pub heading_style: &'static str,
    pub body_style: &'static str,
    pub colors: SectionColors,
}

pub fn render_section(
    section: SectionKind,
    doc: &mut Document,
    data: &ResumeData,
    ctx: &SectionContext,
) -> Result<(), DocumentError> {
    match section {
        SectionKind::Summary => add_summary_section(doc, data, ctx),
        SectionKind::Experience => add_experience_section(doc, data, ctx),
        SectionKind::Projects => add_projects_section(doc, data, ctx),
        SectionKind::Education => add_education_section(doc, data, ctx),
        SectionKind::Skills => add_skills_section(doc, data, ctx),
    }
}

fn add_title(
    doc: &mut Document,
    ctx: &SectionContext,
    section: SectionKind,
) -> Result<(), DocumentError> {
    let vocab = vocabulary(ctx.kind, section);
    doc.add_text(ctx.heading_style, vocab.title)?;
    Ok(())
}

fn add_bullets(
    doc: &mut Document,
    ctx: &SectionContext,
    bullet: &str,
    items: &[String],
) -> Result<(), DocumentError> {
    for item in items {
        doc.add_text(ctx.body_style, format!("{bullet} {item}"))?
            .indent(Length::inches(LIST_INDENT_IN));
    }
    Ok(())
}

pub fn add_summary_section(
    doc: &mut Document,
    data: &ResumeData,
    ctx: &SectionContext,
) -> Result<(), DocumentError> {
    let Some(summary) = data.summary.as_deref() else {
        return Ok(());
    };

    add_title(doc, ctx, SectionKind::Summary)?;
    doc.add_text(ctx.body_style, summary)?;
    Ok(())
}

pub fn add_experience_section(
    doc: &mut Document,
    data: &ResumeData,
    ctx: &SectionContext,
) -> Result<(), DocumentError> {
    if data.experience.is_empty() {
        return Ok(());
    }

    let vocab = vocabulary(ctx.kind, SectionKind::Experience);
    add_title(doc, ctx, SectionKind::Experience)?;

    for exp in &data.experience {
        let headline = format!("{}{}{}", exp.position, vocab.connector, exp.company);
        doc.add_paragraph(ctx.body_style)?
            .add_run(headline)?
            .bold()
            .color(ctx.colors.emphasis);

        if !exp.start_date.is_empty() && !exp.end_date.is_empty() {
            let dates = format!("{}{} - {}", vocab.date_prefix, exp.start_date, exp.end_date);
            doc.add_paragraph(ctx.body_style)?
                .add_run(dates)?
                .italic()
                .color(ctx.colors.detail);
        }

        if let Some(location) = &exp.location {
            doc.add_paragraph(ctx.body_style)?
                .add_run(location.as_str())?
                .color(ctx.colors.detail);
        }

        if let Some(description) = &exp.description {
            doc.add_text(ctx.body_style, description.as_str())?;
        }

        add_bullets(doc, ctx, vocab.bullet, &exp.responsibilities)?;
        doc.add_spacer();
    }
    Ok(())
}

pub fn add_projects_section(
    doc: &mut Document,
    data: &ResumeData,
    ctx: &SectionContext,
) -> Result<(), DocumentError> {
    if data.projects.is_empty() {
        return Ok(());
    }

    let vocab = vocabulary(ctx.kind, SectionKind::Projects);
    add_title(doc, ctx, SectionKind::Projects)?;

    for proj in &data.projects {
        doc.add_paragraph(ctx.body_style)?
            .add_run(proj.name.as_str())?
            .bold()
            .color(ctx.colors.emphasis);

        if !proj.technologies.is_empty() {
            let stack = format!("{} {}", vocab.label, proj.technologies.join(", "));
            doc.add_paragraph(ctx.body_style)?
                .add_run(stack)?
                .italic()
                .color(ctx.colors.detail);
        }

        if let Some(description) = &proj.description {
            doc.add_text(ctx.body_style, description.as_str())?;
        }

        add_bullets(doc, ctx, vocab.bullet, &proj.features)?;

        if let Some(url) = &proj.url {
            doc.add_paragraph(ctx.body_style)?
                .add_run(format!("Link: {url}"))?
                .color(ctx.colors.detail);
        }

        doc.add_spacer();
    }
    Ok(())
}

pub fn add_education_section(
    doc: &mut Document,
    data: &ResumeData,
    ctx: &SectionContext,
) -> Result<(), DocumentError> {
    if data.education.is_empty() {
        return Ok(());
    }

    add_title(doc, ctx, SectionKind::Education)?;
    let color = ctx.colors.education;

    for edu in &data.education {
        doc.add_paragraph(ctx.body_style)?
            .add_run(format!("{} in {}", edu.degree, edu.field))?
            .bold()
            .color(color);

        doc.add_text(ctx.body_style, edu.school.as_str())?;

        let mut grad_info = Vec::new();
        if !edu.graduation_date.is_empty() {
            grad_info.push(format!("Graduated: {}", edu.graduation_date));
        }
        if let Some(gpa) = &edu.gpa {
            grad_info.push(format!("GPA: {gpa}"));
        }
        if !grad_info.is_empty() {
            doc.add_paragraph(ctx.body_style)?
                .add_run(grad_info.join(" | "))?
                .italic()
                .color(color);
        }

        if !edu.honors.is_empty() {
            doc.add_text(
                ctx.body_style,
                format!("Honors: {}", edu.honors.join(", ")),
            )?;
        }

        doc.add_spacer();
    }
    Ok(())
}

pub fn add_skills_section(
    doc: &mut Document,
    data: &ResumeData,
    ctx: &SectionContext,
) -> Result<(), DocumentError> {
    let Some(skills) = data.skills.as_ref().filter(|s| !s.is_empty()) else {
        return Ok(());
    };

    add_title(doc, ctx, SectionKind::Skills)?;

    match skills {
        Skills::Categorized(categories) => {
            for category in categories {
                doc.add_paragraph(ctx.body_style)?
                    .add_run(format!("{}:", category_display_name(&category.key)))?
                    .bold()
                    .color(ctx.colors.skills);
                doc.add_text(ctx.body_style, category.items.join(", "))?
                    .indent(Length::inches(LIST_INDENT_IN));
            }
        }
        Skills::Flat(items) => {
            doc.add_text(ctx.body_style, items.join(", "))?;
        }
    }
    Ok(())
}

/// Human-readable heading for a skill category key.
pub fn category_display_name(key: &str) -> String {
    match key {
        "technical" => "Technical Skills".to_string(),
        "programming" => "Programming Languages".to_string(),
        "languages" => "Languages".to_string(),
        "soft" => "Soft Skills".to_string(),
        "tools" => "Tools & Platforms".to_string(),
        "frameworks" => "Frameworks & Libraries".to_string(),
        "databases" => "Databases".to_string(),
        "certifications" => "Certifications".to_string(),
        other => title_case(other),
    }
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationItem, ExperienceItem, ProjectItem, SkillCategory};

    fn make_ctx(kind: TemplateKind) -> SectionContext {
        SectionContext {
            kind,
            heading_style: "Heading",
            body_style: "Body",
            colors: SectionColors {
                emphasis: Rgb::new(1, 1, 1),
                detail: Rgb::new(2, 2, 2),
                education: Rgb::new(3, 3, 3),
                skills: Rgb::new(4, 4, 4),
            },
        }
    }

    fn make_doc() -> Document {
        let mut doc = Document::new();
        doc.style("Heading");
        doc.style("Body");
        doc
    }

    fn texts(doc: &Document) -> Vec<String> {
        doc.paragraphs().iter().map(|p| p.text()).collect()
    }

    fn make_experience() -> ExperienceItem {
        ExperienceItem {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020".to_string(),
            end_date: "Present".to_string(),
            location: Some("Berlin".to_string()),
            description: Some("Platform team".to_string()),
            responsibilities: vec!["Built APIs".to_string(), "Ran on-call".to_string()],
        }
    }

    #[test]
    fn test_empty_data_renders_nothing() {
        let data = ResumeData::default();
        let mut doc = make_doc();
        for section in SectionKind::ALL {
            render_section(section, &mut doc, &data, &make_ctx(TemplateKind::Modern)).unwrap();
        }
        assert!(doc.paragraphs().is_empty());
    }

    #[test]
    fn test_experience_block_modern() {
        let data = ResumeData {
            experience: vec![make_experience()],
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        add_experience_section(&mut doc, &data, &make_ctx(TemplateKind::Modern)).unwrap();

        assert_eq!(
            texts(&doc),
            vec![
                "PROFESSIONAL EXPERIENCE",
                "Engineer - Acme",
                "2020 - Present",
                "Berlin",
                "Platform team",
                "• Built APIs",
                "• Ran on-call",
                "",
            ]
        );
        let headline = &doc.paragraphs()[1].runs()[0];
        assert!(headline.bold);
        assert_eq!(headline.color, Some(Rgb::new(1, 1, 1)));
        let dates = &doc.paragraphs()[2].runs()[0];
        assert!(dates.italic);
        assert_eq!(doc.paragraphs()[5].left_indent(), Some(Length::inches(0.25)));
        assert_eq!(doc.paragraphs()[0].style(), Some("Heading"));
    }

    #[test]
    fn test_experience_block_tech_vocabulary() {
        let data = ResumeData {
            experience: vec![make_experience()],
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        add_experience_section(&mut doc, &data, &make_ctx(TemplateKind::Tech)).unwrap();

        let t = texts(&doc);
        assert_eq!(t[0], "// EXPERIENCE");
        assert_eq!(t[1], "Engineer @ Acme");
        assert_eq!(t[2], "// 2020 - Present");
        assert_eq!(t[5], "→ Built APIs");
    }

    #[test]
    fn test_projects_block() {
        let data = ResumeData {
            projects: vec![ProjectItem {
                name: "Ledger".to_string(),
                description: Some("Accounting engine".to_string()),
                technologies: vec!["Rust".to_string(), "Postgres".to_string()],
                features: vec!["Double entry".to_string()],
                url: Some("https://example.com".to_string()),
            }],
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        add_projects_section(&mut doc, &data, &make_ctx(TemplateKind::Tech)).unwrap();
        assert_eq!(
            texts(&doc),
            vec![
                "// PROJECTS",
                "Ledger",
                "Stack: Rust, Postgres",
                "Accounting engine",
                "▸ Double entry",
                "Link: https://example.com",
                "",
            ]
        );
    }

    #[test]
    fn test_education_block() {
        let data = ResumeData {
            education: vec![EducationItem {
                school: "MIT".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                graduation_date: "May 2015".to_string(),
                gpa: Some("3.7".to_string()),
                honors: vec!["Dean's List".to_string(), "Magna Cum Laude".to_string()],
            }],
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        add_education_section(&mut doc, &data, &make_ctx(TemplateKind::Minimal)).unwrap();
        assert_eq!(
            texts(&doc),
            vec![
                "Education",
                "BSc in Computer Science",
                "MIT",
                "Graduated: May 2015 | GPA: 3.7",
                "Honors: Dean's List, Magna Cum Laude",
                "",
            ]
        );
        assert_eq!(doc.paragraphs()[3].runs()[0].color, Some(Rgb::new(3, 3, 3)));
    }

    #[test]
    fn test_categorized_skills() {
        let data = ResumeData {
            skills: Some(Skills::Categorized(vec![
                SkillCategory {
                    key: "tools".to_string(),
                    items: vec!["Docker".to_string(), "Git".to_string()],
                },
                SkillCategory {
                    key: "cloud_platforms".to_string(),
                    items: vec!["AWS".to_string()],
                },
            ])),
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        add_skills_section(&mut doc, &data, &make_ctx(TemplateKind::Professional)).unwrap();
        assert_eq!(
            texts(&doc),
            vec![
                "SKILLS & EXPERTISE",
                "Tools & Platforms:",
                "Docker, Git",
                "Cloud_Platforms:",
                "AWS",
            ]
        );
        assert_eq!(doc.paragraphs()[2].left_indent(), Some(Length::inches(0.25)));
    }

    #[test]
    fn test_flat_skills() {
        let data = ResumeData {
            skills: Some(Skills::Flat(vec!["Rust".to_string(), "Go".to_string()])),
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        add_skills_section(&mut doc, &data, &make_ctx(TemplateKind::Creative)).unwrap();
        assert_eq!(texts(&doc), vec!["✨ SKILLS & TALENTS", "Rust, Go"]);
    }

    #[test]
    fn test_unregistered_body_style_fails() {
        let data = ResumeData {
            summary: Some("Hello".to_string()),
            ..ResumeData::default()
        };
        let mut doc = Document::new();
        doc.style("Heading");
        let err = add_summary_section(&mut doc, &data, &make_ctx(TemplateKind::Modern));
        assert!(matches!(err, Err(DocumentError::UnknownStyle(_))));
    }

    #[test]
    fn test_control_characters_in_data_fail_the_section() {
        let mut exp = make_experience();
        exp.company = "Acme\u{0}Corp".to_string();
        let data = ResumeData {
            experience: vec![exp],
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        let err = add_experience_section(&mut doc, &data, &make_ctx(TemplateKind::Modern));
        assert!(matches!(
            err,
            Err(DocumentError::InvalidText(text)) if text == "Engineer - Acme\u{0}Corp"
        ));

        let data = ResumeData {
            skills: Some(Skills::Flat(vec!["Rust".to_string(), "\u{1B}[31mGo".to_string()])),
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        let err = add_skills_section(&mut doc, &data, &make_ctx(TemplateKind::Tech));
        assert!(matches!(err, Err(DocumentError::InvalidText(_))));
    }

    #[test]
    fn test_multiline_summary_stays_one_paragraph() {
        let data = ResumeData {
            summary: Some("Builds teams.\nShips platforms.".to_string()),
            ..ResumeData::default()
        };
        let mut doc = make_doc();
        add_summary_section(&mut doc, &data, &make_ctx(TemplateKind::Modern)).unwrap();
        assert_eq!(doc.paragraphs().len(), 2);
        assert_eq!(doc.paragraphs()[1].text(), "Builds teams.\nShips platforms.");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hobbies"), "Hobbies");
        assert_eq!(title_case("cloud platforms"), "Cloud Platforms");
        assert_eq!(title_case("gitHUB"), "Github");
    }
}
