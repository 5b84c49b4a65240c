//! shields.io badge rendering.

use serde_yaml::Value;

use coursegen_core::labels::Labels;

const SHIELDS_BASE: &str = "https://img.shields.io/badge";

/// Escapes text for a shields.io badge path segment.
///
/// `-` → `--`, `_` → `__`, space → `_`, `?` → `%3F`.
#[must_use]
pub fn shield_escape(text: &str) -> String {
    text.replace('-', "--")
        .replace('_', "__")
        .replace(' ', "_")
        .replace('?', "%3F")
}

/// Badge for a single content topic.
#[must_use]
pub fn content_badge(topic: &str) -> String {
    format!("![]({SHIELDS_BASE}/-{}-lightgrey)", shield_escape(topic))
}

/// Badge line for a week's content topics, space separated.
#[must_use]
pub fn content_badges(topics: &[String]) -> String {
    topics
        .iter()
        .map(|t| content_badge(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Badge color for a difficulty level.
#[must_use]
pub fn difficulty_color(level: &str) -> &'static str {
    match level.trim().to_lowercase().as_str() {
        "intermedio" | "intermediate" | "intermédiaire" => "yellow",
        "avanzado" | "advanced" | "dificil" | "difícil" | "avancé" => "red",
        _ => "green",
    }
}

// ============================================================================
// Activity Metadata
// ============================================================================

/// Badge-relevant metadata read from an activity page's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityMeta {
    pub kind: Option<String>,
    pub duration: Option<String>,
    pub modality: Option<String>,
    pub difficulty: Option<String>,
}

impl ActivityMeta {
    /// Extracts metadata from parsed frontmatter.
    ///
    /// Keys are read from a nested `activity:` mapping when present,
    /// otherwise from the top level. Scalar values of any type are
    /// accepted and rendered as text.
    #[must_use]
    pub fn from_frontmatter(frontmatter: &Value) -> Self {
        let source = match frontmatter.get("activity") {
            Some(nested @ Value::Mapping(_)) => nested,
            _ => frontmatter,
        };
        let field = |key: &str| source.get(key).and_then(scalar_text);
        Self {
            kind: field("type"),
            duration: field("duration"),
            modality: field("modality"),
            difficulty: field("difficulty"),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.duration.is_none()
            && self.modality.is_none()
            && self.difficulty.is_none()
    }

    /// Renders the badge line in type, duration, modality, difficulty order.
    #[must_use]
    pub fn badges(&self, labels: &Labels) -> String {
        let mut badges = Vec::new();
        if let Some(kind) = &self.kind {
            badges.push(labeled_badge(labels.badge_type, kind, "orange"));
        }
        if let Some(duration) = &self.duration {
            badges.push(labeled_badge(labels.badge_duration, duration, "yellow"));
        }
        if let Some(modality) = &self.modality {
            badges.push(labeled_badge(labels.badge_modality, modality, "blue"));
        }
        if let Some(difficulty) = &self.difficulty {
            badges.push(labeled_badge(
                labels.badge_difficulty,
                difficulty,
                difficulty_color(difficulty),
            ));
        }
        badges.join(" ")
    }
}

fn labeled_badge(label: &str, value: &str, color: &str) -> String {
    format!(
        "![]({SHIELDS_BASE}/{}-{}-{color})",
        shield_escape(label),
        shield_escape(value)
    )
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
