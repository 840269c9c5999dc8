//! Per-template section vocabulary: titles, bullet glyphs and label phrasing.
//!
//! Built once on first use and read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::TemplateKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Education,
        SectionKind::Skills,
    ];
}

/// Words and glyphs a template uses for one section.
///
/// `connector` joins position and company in experience headlines,
/// `label` prefixes the technology list of a project, and `date_prefix`
/// leads experience date lines. Fields a section does not use are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVocab {
    pub title: &'static str,
    pub bullet: &'static str,
    pub connector: &'static str,
    pub label: &'static str,
    pub date_prefix: &'static str,
}

const EMPTY: SectionVocab = SectionVocab {
    title: "",
    bullet: "",
    connector: "",
    label: "",
    date_prefix: "",
};

static VOCABULARY: Lazy<HashMap<(TemplateKind, SectionKind), SectionVocab>> = Lazy::new(|| {
    TemplateKind::ALL
        .iter()
        .flat_map(|&kind| {
            SectionKind::ALL
                .iter()
                .map(move |&section| ((kind, section), entry(kind, section)))
        })
        .collect()
});

/// Looks up the vocabulary for `section` as rendered by `kind`.
pub fn vocabulary(kind: TemplateKind, section: SectionKind) -> SectionVocab {
    VOCABULARY
        .get(&(kind, section))
        .copied()
        .unwrap_or_else(|| entry(kind, section))
}

fn entry(kind: TemplateKind, section: SectionKind) -> SectionVocab {
    use SectionKind as S;
    use TemplateKind as T;

    match section {
        S::Summary => SectionVocab {
            title: match kind {
                T::Modern | T::Professional => "PROFESSIONAL SUMMARY",
                T::Minimal => "Summary",
                T::Creative => "✨ CREATIVE PROFILE",
                T::Executive => "EXECUTIVE SUMMARY",
                T::Tech => "// PROFILE",
            },
            ..EMPTY
        },
        S::Experience => SectionVocab {
            title: match kind {
                T::Modern => "PROFESSIONAL EXPERIENCE",
                T::Professional => "WORK EXPERIENCE",
                T::Minimal => "Experience",
                T::Creative => "✨ EXPERIENCE",
                T::Executive => "EXECUTIVE EXPERIENCE",
                T::Tech => "// EXPERIENCE",
            },
            bullet: match kind {
                T::Tech => "→",
                T::Creative => "◦",
                _ => "•",
            },
            connector: match kind {
                T::Tech => " @ ",
                _ => " - ",
            },
            date_prefix: match kind {
                T::Tech => "// ",
                _ => "",
            },
            ..EMPTY
        },
        S::Projects => SectionVocab {
            title: match kind {
                T::Modern => "KEY PROJECTS",
                T::Professional => "NOTABLE PROJECTS",
                T::Minimal => "Projects",
                T::Creative => "✨ PROJECTS",
                T::Executive => "STRATEGIC PROJECTS",
                T::Tech => "// PROJECTS",
            },
            bullet: match kind {
                T::Tech => "▸",
                T::Creative => "◦",
                _ => "•",
            },
            label: match kind {
                T::Tech => "Stack:",
                _ => "Technologies:",
            },
            ..EMPTY
        },
        S::Education => SectionVocab {
            title: match kind {
                T::Minimal => "Education",
                T::Creative => "✨ EDUCATION",
                T::Tech => "// EDUCATION",
                _ => "EDUCATION",
            },
            ..EMPTY
        },
        S::Skills => SectionVocab {
            title: match kind {
                T::Modern | T::Executive => "CORE COMPETENCIES",
                T::Professional => "SKILLS & EXPERTISE",
                T::Minimal => "Skills",
                T::Creative => "✨ SKILLS & TALENTS",
                T::Tech => "// SKILLS",
            },
            ..EMPTY
        },
    }
}
