//! Résumé completeness checks.
//!
//! Findings fall into two tiers. Errors block generation; warnings are
//! advisory and travel alongside a successful render. Every rule inspects the
//! raw JSON so that shape problems (a string where a list belongs, a number
//! where an object belongs) are reported rather than silently dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::templates::TemplateKind;

use super::error::ResumeError;
use super::format::{format_list_items, is_truthy, lookup, safe_get, value_to_string};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d{4}$",
        r"^\d{1,2}/\d{4}$",
        r"^\d{4}-\d{1,2}$",
        r"^[A-Za-z]{3,9}\s+\d{4}$",
        r"^\d{1,2}/\d{1,2}/\d{4}$",
        r"^(?i:present|current|ongoing)$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid date regex"))
    .collect()
});

const DATE_EXAMPLES: &str = "2023, 01/2023, 2023-01, January 2023";

const DATE_FIELDS: [(&str, &str); 3] = [
    ("start_date", "Start Date"),
    ("end_date", "End Date"),
    ("graduation_date", "Graduation Date"),
];

const RECOGNIZED_SKILL_CATEGORIES: [&str; 6] =
    ["technical", "soft", "languages", "tools", "frameworks", "databases"];

const MIN_SUMMARY_CHARS: usize = 50;
const MAX_SUMMARY_CHARS: usize = 500;
const MAX_EMAIL_CHARS: usize = 100;
const MIN_PHONE_CHARS: usize = 7;
const MAX_PHONE_CHARS: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub summary: ValidationSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub total_errors: usize,
    pub total_warnings: usize,
    pub sections_present: SectionsPresent,
}

/// Which top-level sections carry a non-empty value in the raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionsPresent {
    pub personal_info: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub projects: bool,
    pub skills: bool,
}

#[derive(Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Runs every rule against `data`.
///
/// Returns `Err(ResumeError::MissingData)` only when `data` is not a
/// non-empty JSON object. Content problems are reported in the result.
pub fn validate(data: &Value) -> Result<ValidationResult, ResumeError> {
    if !data.as_object().is_some_and(|map| !map.is_empty()) {
        return Err(ResumeError::MissingData);
    }

    let mut findings = Findings::default();

    check_personal_info(data, &mut findings);
    check_template(data, &mut findings);
    check_content_present(data, &mut findings);
    check_items(data, Section::Experience, &mut findings);
    check_items(data, Section::Education, &mut findings);
    check_items(data, Section::Projects, &mut findings);
    check_skills(data, &mut findings);
    check_summary(data, &mut findings);

    let sections_present = sections_present(data);
    let Findings { errors, warnings } = findings;
    Ok(ValidationResult {
        is_valid: errors.is_empty(),
        summary: ValidationSummary {
            total_errors: errors.len(),
            total_warnings: warnings.len(),
            sections_present,
        },
        errors,
        warnings,
    })
}

fn sections_present(data: &Value) -> SectionsPresent {
    let present = |key: &str| lookup(data, key).is_some_and(is_truthy);
    SectionsPresent {
        personal_info: present("personal_info"),
        summary: present("summary"),
        experience: present("experience"),
        education: present("education"),
        projects: present("projects"),
        skills: present("skills"),
    }
}

/// Trimmed text of `record[key]`, or `None` when missing, falsy or blank.
fn text(record: &Value, key: &str) -> Option<String> {
    Some(safe_get(record, key, "")).filter(|s| !s.is_empty())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

fn check_personal_info(data: &Value, findings: &mut Findings) {
    let info = match lookup(data, "personal_info") {
        Some(info) if is_truthy(info) => info,
        _ => {
            findings.error("Personal information section is required");
            return;
        }
    };
    if !info.is_object() {
        findings.error("Personal information section must be a valid object/dictionary");
        return;
    }

    match text(info, "full_name") {
        None => findings.error("Personal info: Full Name is required"),
        Some(name) if char_len(&name) < 2 => {
            findings.error("Personal info: Full Name must be at least 2 characters long")
        }
        Some(_) => {}
    }

    for (field, display) in [
        ("email", "Email address"),
        ("phone", "Phone number"),
        ("location", "Location"),
    ] {
        if text(info, field).is_none() {
            findings.warn(format!(
                "Personal info: {display} is recommended for better visibility"
            ));
        }
    }

    if let Some(email) = text(info, "email") {
        if !EMAIL_RE.is_match(&email) {
            findings.error("Personal info: Email format is invalid (example: user@domain.com)");
        } else if char_len(&email) > MAX_EMAIL_CHARS {
            findings.warn("Personal info: Email address seems unusually long");
        }
    }

    if let Some(phone) = text(info, "phone") {
        let dialable = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-') || c.is_whitespace())
            .count();
        if dialable < MIN_PHONE_CHARS {
            findings.warn("Personal info: Phone number seems too short");
        } else if dialable > MAX_PHONE_CHARS {
            findings.warn("Personal info: Phone number seems too long");
        }
    }

    for (field, display) in [
        ("linkedin", "Linkedin"),
        ("portfolio", "Portfolio"),
        ("github", "Github"),
    ] {
        if let Some(url) = text(info, field) {
            let linked = ["http://", "https://", "www."]
                .iter()
                .any(|prefix| url.starts_with(prefix));
            if !linked {
                findings.warn(format!(
                    "Personal info: {display} should include 'https://' or 'www.'"
                ));
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template and content presence
// ────────────────────────────────────────────────────────────────────────────

fn check_template(data: &Value, findings: &mut Findings) {
    let template = match lookup(data, "template") {
        Some(t) if is_truthy(t) => t,
        _ => {
            findings.error("Template selection is required");
            return;
        }
    };

    let known = template.as_str().and_then(TemplateKind::from_name).is_some();
    if !known {
        findings.error(format!(
            "Invalid template '{}'. Available templates: {}",
            value_to_string(template),
            TemplateKind::available_names()
        ));
    }
}

fn check_content_present(data: &Value, findings: &mut Findings) {
    let any = ["experience", "education", "projects"]
        .iter()
        .any(|key| lookup(data, key).is_some_and(is_truthy));
    if !any {
        findings.error("At least one content section is required: Experience, Education, or Projects");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// List sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Section {
    Experience,
    Education,
    Projects,
}

impl Section {
    fn key(self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
        }
    }

    fn not_a_list(self) -> &'static str {
        match self {
            Section::Experience => "Experience section must be a list of experience items",
            Section::Education => "Education section must be a list of education items",
            Section::Projects => "Projects section must be a list of project items",
        }
    }

    fn item_label(self) -> &'static str {
        match self {
            Section::Experience => "Experience item",
            Section::Education => "Education item",
            Section::Projects => "Project item",
        }
    }
}

fn check_items(data: &Value, section: Section, findings: &mut Findings) {
    let value = match lookup(data, section.key()) {
        Some(v) if is_truthy(v) => v,
        _ => return,
    };
    let Some(items) = value.as_array() else {
        findings.error(section.not_a_list());
        return;
    };

    for (i, item) in items.iter().enumerate() {
        let context = format!("{} {}", section.item_label(), i + 1);
        if !item.is_object() {
            findings.error(format!("{context}: Must be a valid object/dictionary"));
            continue;
        }
        match section {
            Section::Experience => check_experience_item(item, &context, findings),
            Section::Education => check_education_item(item, &context, findings),
            Section::Projects => check_project_item(item, &context, findings),
        }
    }
}

/// Reports missing required fields and, for the fields in `min_two`, values
/// shorter than two characters.
fn check_required(
    item: &Value,
    context: &str,
    fields: &[(&str, &str)],
    min_two: &[&str],
    findings: &mut Findings,
) {
    for &(field, display) in fields {
        match text(item, field) {
            None => findings.error(format!("{context}: {display} is required")),
            Some(value) if min_two.contains(&field) && char_len(&value) < 2 => {
                findings.error(format!("{context}: {display} must be at least 2 characters"))
            }
            Some(_) => {}
        }
    }
}

fn check_experience_item(item: &Value, context: &str, findings: &mut Findings) {
    check_required(
        item,
        context,
        &[
            ("position", "Job Position"),
            ("company", "Company Name"),
            ("start_date", "Start Date"),
            ("end_date", "End Date"),
        ],
        &["position", "company"],
        findings,
    );
    check_dates(item, context, findings);

    if !has_any(item, &["description", "responsibilities"]) {
        findings.warn(format!(
            "{context}: Consider adding description or responsibilities"
        ));
    }
}

fn check_education_item(item: &Value, context: &str, findings: &mut Findings) {
    check_required(
        item,
        context,
        &[
            ("school", "School/Institution Name"),
            ("degree", "Degree Type"),
            ("field", "Field of Study"),
            ("graduation_date", "Graduation Date"),
        ],
        &["school", "degree", "field"],
        findings,
    );

    if let Some(gpa) = lookup(item, "gpa").filter(|v| is_truthy(v)) {
        match parse_gpa(gpa) {
            Some(gpa) if gpa < 0.0 || gpa > 4.0 => findings.warn(format!(
                "{context}: GPA should typically be between 0.0 and 4.0"
            )),
            Some(_) => {}
            None => findings.warn(format!("{context}: GPA should be a number")),
        }
    }
    check_dates(item, context, findings);
}

fn parse_gpa(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn check_project_item(item: &Value, context: &str, findings: &mut Findings) {
    match text(item, "name") {
        None => findings.error(format!("{context}: Project name is required")),
        Some(name) if char_len(&name) < 2 => findings.error(format!(
            "{context}: Project name must be at least 2 characters"
        )),
        Some(_) => {}
    }
    check_dates(item, context, findings);

    // Projects list their bullets under `features`; `responsibilities` is
    // still honoured for input written against the experience shape.
    if !has_any(item, &["description", "features", "responsibilities"]) {
        findings.warn(format!(
            "{context}: Consider adding description or key features"
        ));
    }
}

fn has_any(item: &Value, keys: &[&str]) -> bool {
    keys.iter().any(|key| lookup(item, key).is_some_and(is_truthy))
}

/// Malformed dates only ever warn.
fn check_dates(item: &Value, context: &str, findings: &mut Findings) {
    for (field, display) in DATE_FIELDS {
        let Some(date) = text(item, field) else {
            continue;
        };
        if !is_recognized_date(&date) {
            findings.warn(format!(
                "{context}: {display} format may be incorrect. Try formats like: {DATE_EXAMPLES}"
            ));
        }
    }
}

pub fn is_recognized_date(date: &str) -> bool {
    let date = date.trim();
    DATE_PATTERNS.iter().any(|re| re.is_match(date))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills and summary
// ────────────────────────────────────────────────────────────────────────────

fn check_skills(data: &Value, findings: &mut Findings) {
    let skills = match lookup(data, "skills") {
        Some(s) if is_truthy(s) => s,
        _ => {
            findings.warn("Skills section is highly recommended to showcase your abilities");
            return;
        }
    };

    let Some(categories) = skills.as_object() else {
        findings.warn(
            "Skills section should be organized by categories (technical, soft, languages, tools)",
        );
        return;
    };

    let has_skills = RECOGNIZED_SKILL_CATEGORIES
        .iter()
        .any(|category| !format_list_items(categories.get(*category)).is_empty());
    if !has_skills {
        findings.warn("Skills section is present but appears empty - consider adding relevant skills");
    }
}

fn check_summary(data: &Value, findings: &mut Findings) {
    let summary = match lookup(data, "summary") {
        Some(s) if is_truthy(s) => value_to_string(s),
        _ => {
            findings.warn("Professional summary is recommended to provide a strong opening statement");
            return;
        }
    };

    let len = char_len(summary.trim());
    if len < MIN_SUMMARY_CHARS {
        findings.warn("Professional summary is quite short - consider expanding to 2-3 sentences");
    } else if len > MAX_SUMMARY_CHARS {
        findings.warn("Professional summary is quite long - consider condensing to key highlights");
    }
}
