//! Resume record as produced by the builder form
//!
//! The record went through two schema generations: skills were first a
//! comma-separated string and later a categorized record, and projects
//! carried a flat `tech` string before gaining a `techStack` array. Both
//! generations deserialize into the same types here, and every field is
//! optional so a partially filled form never fails to load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Full resume record. Read-only input to the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub personal: PersonalInfo,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

/// A project entry in either schema generation.
///
/// Older records carry `name` and a flat `tech` string, newer ones `title`
/// and a `techStack` array. Use [`ProjectEntry::technologies`] rather than
/// reading either field directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(alias = "title", deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub tech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string_list")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_string")]
    pub live_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub github_url: Option<String>,
}

impl ProjectEntry {
    /// Technologies used, normalized across both project shapes.
    pub fn technologies(&self) -> Vec<String> {
        if let Some(stack) = self.tech_stack.as_ref().filter(|s| !s.is_empty()) {
            return stack
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
        }

        self.tech
            .as_deref()
            .map(split_comma_list)
            .unwrap_or_default()
    }
}

/// Skills in either schema generation.
///
/// Only a JSON string or object is accepted as skills; arrays, numbers and
/// null land in [`Skills::Other`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Skills {
    /// Comma-separated list, e.g. `"React, Node, Go"`.
    Text(String),
    Categorized(SkillCategories),
    /// Anything else. Counts as zero skills.
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategories {
    #[serde(deserialize_with = "null_as_default")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub soft: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Skills::Text(text),
            value @ Value::Object(_) => match SkillCategories::deserialize(&value) {
                Ok(categories) => Skills::Categorized(categories),
                Err(_) => Skills::Other(value),
            },
            other => Skills::Other(other),
        })
    }
}

impl Default for Skills {
    fn default() -> Self {
        Skills::Text(String::new())
    }
}

impl Skills {
    /// Flat skill list in display order.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Skills::Text(text) => split_comma_list(text),
            Skills::Categorized(categories) => categories
                .technical
                .iter()
                .chain(&categories.soft)
                .chain(&categories.tools)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Skills::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(deserialize_with = "lenient_string")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub linkedin: Option<String>,
}

/// True when the field holds something other than whitespace.
pub fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Split a comma-separated list, trimming entries and dropping empties.
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts strings and scalars; anything else becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_string_list<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
