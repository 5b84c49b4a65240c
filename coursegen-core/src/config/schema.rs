//! Course plan schema types
//!
//! These types are deserialized from the JSON course plan
//! (`planeamiento.json`). Fields that authors write either as a single string
//! or as a list are normalized to `Vec<String>` here, so nothing downstream
//! has to care which form was used.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root of a course plan.
///
/// The plan is loaded once per run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseConfig {
    /// Course-level metadata
    #[serde(default)]
    pub metadata: CourseMetadata,

    /// Weekly plan entries, in file order
    #[serde(default)]
    pub weeks: Vec<WeekEntry>,
}

impl CourseConfig {
    /// Returns the entries with a usable week number, in file order.
    pub fn numbered_weeks(&self) -> impl Iterator<Item = (u32, &WeekEntry)> {
        self.weeks
            .iter()
            .filter_map(|entry| entry.number().map(|n| (n, entry)))
    }

    /// Returns the entries matching `week`, or every numbered entry when
    /// `week` is `None`.
    #[must_use]
    pub fn select_weeks(&self, week: Option<u32>) -> Vec<(u32, &WeekEntry)> {
        self.numbered_weeks()
            .filter(|(n, _)| week.is_none_or(|w| w == *n))
            .collect()
    }
}

/// Course metadata block.
///
/// Every field is optional; each generator falls back to its own default
/// text when a field is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMetadata {
    /// Course title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Course code (e.g., `FI1105`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Academic term (e.g., `II Semestre 2025`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,

    /// Institution name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,

    /// Course authors; a single string is accepted
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub authors: Vec<String>,

    /// Free-text course description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source repository URL, used for the site's GitHub link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

impl CourseMetadata {
    /// Returns `true` if no metadata field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns the first listed author, if any.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

// ============================================================================
// Week Entries
// ============================================================================

/// One week of the course plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEntry {
    /// Week number; missing or `0` means the entry is skipped by generators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,

    /// Session title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Session subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Content topics, rendered as badges
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub content: Vec<String>,

    /// Learning objectives
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub objectives: Vec<String>,

    /// Activity descriptions; a single string is accepted
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub activities: Vec<String>,

    /// Evaluation items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evaluation: Vec<EvaluationItem>,

    /// Bibliographic references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
}

impl WeekEntry {
    /// Returns the week number if it is usable (present and non-zero).
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.week.filter(|n| *n > 0)
    }
}

/// Field names accepted in a week entry.
pub const WEEK_ENTRY_FIELDS: &[&str] = &[
    "week",
    "title",
    "subtitle",
    "content",
    "objectives",
    "activities",
    "evaluation",
    "references",
];

/// An evaluation item of a week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationItem {
    /// Evaluation kind (e.g., `Quiz`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// What is evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A bibliographic reference of a week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Citation text
    #[serde(default)]
    pub text: String,

    /// Page range; numbers are accepted and kept as text
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub pages: Option<String>,
}

// ============================================================================
// Normalizing Deserializers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Deserializes a string, a list of strings, or `null` into a list.
///
/// An empty string yields an empty list.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) if s.trim().is_empty() => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(items)) => items,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Deserializes a string or a number into optional text.
///
/// An empty string yields `None`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => None,
        Some(TextOrNumber::Text(s)) if s.is_empty() => None,
        Some(TextOrNumber::Text(s)) => Some(s),
        Some(TextOrNumber::Number(n)) => Some(n.to_string()),
    })
}
