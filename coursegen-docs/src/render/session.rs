//! Session pages.
//!
//! One page per numbered week: YAML frontmatter describing the session,
//! followed by content badges, the objectives admonition, activity links,
//! evaluation items and references.

use serde::Serialize;

use coursegen_core::config::{CourseMetadata, EvaluationItem, Reference, WeekEntry};
use coursegen_core::error::SlugError;
use coursegen_core::labels::Labels;
use coursegen_core::slug::generate_filename;

use crate::error::DocsError;
use crate::layout::ACTIVITIES_DIR;
use crate::render::activity::activity_filenames;
use crate::render::badges::content_badges;

/// Title words longer than this become keywords.
const KEYWORD_MIN_CHARS: usize = 4;

const DEFAULT_SUBJECT: &str = "your course name";

#[derive(Debug, Serialize)]
struct SessionFrontmatter<'a> {
    title: &'a str,
    subtitle: &'a str,
    subject: &'a str,
    session: SessionInfo<'a>,
    keywords: Vec<&'a str>,
    learning_objectives: &'a [String],
    activities: &'a [String],
    evaluation: &'a [EvaluationItem],
    references: &'a [Reference],
}

#[derive(Debug, Serialize)]
struct SessionInfo<'a> {
    number: u32,
    duration: &'a str,
    modality: &'a str,
}

/// The session title, or `"{Session} {n}"` when the entry has none.
#[must_use]
pub fn session_title(week: u32, entry: &WeekEntry, labels: &Labels) -> String {
    entry
        .title
        .clone()
        .unwrap_or_else(|| format!("{} {week}", labels.session))
}

/// The session subtitle, or `"{Week} {n}"` when the entry has none.
#[must_use]
pub fn session_subtitle(week: u32, entry: &WeekEntry, labels: &Labels) -> String {
    entry
        .subtitle
        .clone()
        .unwrap_or_else(|| format!("{} {week}", labels.week))
}

/// File name of the session page for `week`.
///
/// # Errors
///
/// Returns `SlugError::EmptySlug` if the title has no usable characters.
pub fn session_filename(week: u32, entry: &WeekEntry, labels: &Labels) -> Result<String, SlugError> {
    generate_filename(week, &session_title(week, entry, labels))
}

/// Renders the full session page.
///
/// # Errors
///
/// Returns `DocsError::Yaml` if the frontmatter cannot be serialized.
pub fn render_session(
    metadata: &CourseMetadata,
    week: u32,
    entry: &WeekEntry,
    labels: &Labels,
) -> Result<String, DocsError> {
    let title = session_title(week, entry, labels);
    let subtitle = session_subtitle(week, entry, labels);

    let frontmatter = SessionFrontmatter {
        title: &title,
        subtitle: &subtitle,
        subject: metadata.title.as_deref().unwrap_or(DEFAULT_SUBJECT),
        session: SessionInfo {
            number: week,
            duration: "TBD",
            modality: labels.modality,
        },
        keywords: title
            .split_whitespace()
            .filter(|word| word.chars().count() > KEYWORD_MIN_CHARS)
            .collect(),
        learning_objectives: &entry.objectives,
        activities: &entry.activities,
        evaluation: &entry.evaluation,
        references: &entry.references,
    };
    let yaml = serde_yaml::to_string(&frontmatter)?;

    let mut page = format!("---\n{yaml}---\n\n");

    if !entry.content.is_empty() {
        page.push_str(&content_badges(&entry.content));
        page.push_str("\n\n");
    }

    if !entry.objectives.is_empty() {
        page.push_str(&format!(":::{{note}} {}\n", labels.objectives));
        page.push_str(labels.objectives_intro);
        page.push('\n');
        for (i, objective) in entry.objectives.iter().enumerate() {
            page.push_str(&format!("{}. {objective}\n", i + 1));
        }
        page.push_str(":::\n\n");
    }

    if !entry.activities.is_empty() {
        page.push_str(&format!("## {}\n\n", labels.activities));
        let names = activity_filenames(week, &entry.activities);
        for (description, name) in entry.activities.iter().zip(names) {
            match name {
                Ok(name) => page.push_str(&format!(
                    "- [{description}](../{ACTIVITIES_DIR}/{name})\n"
                )),
                Err(_) => page.push_str(&format!("- {description}\n")),
            }
        }
        page.push('\n');
    }

    if !entry.evaluation.is_empty() {
        page.push_str(&format!("## {}\n\n", labels.evaluation));
        for item in &entry.evaluation {
            page.push_str(&format!(
                "- **{}**: {}\n",
                item.kind.as_deref().unwrap_or(labels.evaluation),
                item.description.as_deref().unwrap_or_default()
            ));
        }
        page.push('\n');
    }

    if !entry.references.is_empty() {
        page.push_str(&format!("## {}\n\n", labels.references));
        for reference in &entry.references {
            match &reference.pages {
                Some(pages) => page.push_str(&format!("- {}, {pages}\n", reference.text)),
                None => page.push_str(&format!("- {}\n", reference.text)),
            }
        }
        page.push('\n');
    }

    Ok(page)
}
