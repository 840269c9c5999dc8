//! Typed résumé model.
//!
//! Input arrives as loosely-shaped JSON. [`ResumeData::from_value`] narrows it
//! once: scalars are trimmed via `safe_get`, multi-value fields go through
//! `format_list_items`, and anything that is not the expected shape is
//! dropped. Renderers only ever see this model.

use serde::Serialize;
use serde_json::Value;

use crate::resume::format::{format_list_items, is_truthy, lookup, safe_get};

#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceItem {
    pub position: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationItem {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    pub gpa: Option<String>,
    pub honors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectItem {
    pub name: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    /// Category key as supplied, e.g. `technical` or `tools`.
    pub key: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Skills {
    Categorized(Vec<SkillCategory>),
    Flat(Vec<String>),
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        match self {
            Skills::Categorized(categories) => categories.is_empty(),
            Skills::Flat(items) => items.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResumeData {
    pub template: Option<String>,
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub projects: Vec<ProjectItem>,
    pub skills: Option<Skills>,
}

impl ResumeData {
    pub fn from_value(data: &Value) -> Self {
        let personal_info = lookup(data, "personal_info")
            .filter(|v| v.is_object())
            .map(PersonalInfo::from_value)
            .unwrap_or_default();

        ResumeData {
            template: optional(data, "template"),
            personal_info,
            summary: optional(data, "summary"),
            experience: records(data, "experience")
                .map(ExperienceItem::from_value)
                .collect(),
            education: records(data, "education")
                .map(EducationItem::from_value)
                .collect(),
            projects: records(data, "projects").map(ProjectItem::from_value).collect(),
            skills: lookup(data, "skills")
                .filter(|v| is_truthy(v))
                .map(Skills::from_value)
                .filter(|s| !s.is_empty()),
        }
    }
}

impl PersonalInfo {
    fn from_value(v: &Value) -> Self {
        PersonalInfo {
            full_name: safe_get(v, "full_name", ""),
            title: optional(v, "title"),
            email: optional(v, "email"),
            phone: optional(v, "phone"),
            location: optional(v, "location"),
            linkedin: optional(v, "linkedin"),
            portfolio: optional(v, "portfolio"),
            github: optional(v, "github"),
        }
    }
}

impl ExperienceItem {
    fn from_value(v: &Value) -> Self {
        ExperienceItem {
            position: safe_get(v, "position", ""),
            company: safe_get(v, "company", ""),
            start_date: safe_get(v, "start_date", ""),
            end_date: safe_get(v, "end_date", ""),
            location: optional(v, "location"),
            description: optional(v, "description"),
            responsibilities: format_list_items(lookup(v, "responsibilities")),
        }
    }
}

impl EducationItem {
    fn from_value(v: &Value) -> Self {
        EducationItem {
            school: safe_get(v, "school", ""),
            degree: safe_get(v, "degree", ""),
            field: safe_get(v, "field", ""),
            graduation_date: safe_get(v, "graduation_date", ""),
            gpa: optional(v, "gpa"),
            honors: format_list_items(lookup(v, "honors")),
        }
    }
}

impl ProjectItem {
    fn from_value(v: &Value) -> Self {
        ProjectItem {
            name: safe_get(v, "name", ""),
            description: optional(v, "description"),
            technologies: format_list_items(lookup(v, "technologies")),
            features: format_list_items(lookup(v, "features")),
            url: optional(v, "url"),
        }
    }
}

impl Skills {
    fn from_value(v: &Value) -> Self {
        match v.as_object() {
            Some(map) => Skills::Categorized(
                map.iter()
                    .filter(|(_, items)| is_truthy(items))
                    .map(|(key, items)| SkillCategory {
                        key: key.clone(),
                        items: format_list_items(Some(items)),
                    })
                    .filter(|c| !c.items.is_empty())
                    .collect(),
            ),
            None => Skills::Flat(format_list_items(Some(v))),
        }
    }
}

fn optional(record: &Value, key: &str) -> Option<String> {
    let value = safe_get(record, key, "");
    (!value.is_empty()).then_some(value)
}

fn records<'a>(data: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    lookup(data, key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|item| item.is_object())
}
