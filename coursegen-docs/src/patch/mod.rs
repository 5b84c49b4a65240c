//! In-place patching of hand-edited text documents.
//!
//! Course files are edited by hand after generation, so updates never
//! re-serialize a whole document. A patch locates an anchor (a marker
//! pair, a key inside a YAML section, a file reference) and rewrites only
//! the matched span. Every byte outside that span is preserved, which keeps
//! comments, ordering and formatting intact, and applying the same patch
//! twice yields the same text.

pub mod text;

use std::fmt;

pub use text::TextPatcher;

/// Marker delimiting the badge block of an activity page.
pub const ACTIVITY_BADGES_MARKER: &str = "<!-- ACTIVITY-BADGES -->";

// ============================================================================
// Anchors
// ============================================================================

/// A region delimited by two copies of the same marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerBlock {
    marker: String,
}

impl MarkerBlock {
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// The badge block of an activity page.
    #[must_use]
    pub fn activity_badges() -> Self {
        Self::new(ACTIVITY_BADGES_MARKER)
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Renders the full block: marker, payload, marker.
    #[must_use]
    pub fn render(&self, payload: &str) -> String {
        format!("{m}\n{payload}\n{m}", m = self.marker)
    }
}

/// Where a scalar value lives inside a YAML section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPath {
    /// A direct child key of the section
    Key(String),
    /// A field of the first item of a list-valued key
    FirstListItem {
        list: String,
        field: String,
    },
}

/// A scalar to replace in a YAML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTarget {
    /// Top-level section holding the key; `None` targets a top-level key
    pub section: Option<String>,
    pub path: KeyPath,
}

impl KeyTarget {
    /// `section.key`
    #[must_use]
    pub fn key(section: &str, key: &str) -> Self {
        Self {
            section: Some(section.to_string()),
            path: KeyPath::Key(key.to_string()),
        }
    }

    /// A key at column 0.
    #[must_use]
    pub fn top_level(key: &str) -> Self {
        Self {
            section: None,
            path: KeyPath::Key(key.to_string()),
        }
    }

    /// `section.list[0].field`
    #[must_use]
    pub fn first_list_item(section: &str, list: &str, field: &str) -> Self {
        Self {
            section: Some(section.to_string()),
            path: KeyPath::FirstListItem {
                list: list.to_string(),
                field: field.to_string(),
            },
        }
    }
}

impl fmt::Display for KeyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(section) = &self.section {
            write!(f, "{section}.")?;
        }
        match &self.path {
            KeyPath::Key(key) => f.write_str(key),
            KeyPath::FirstListItem { list, field } => write!(f, "{list}[0].{field}"),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// How a patch was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchAction {
    /// An existing anchor was found and its span rewritten
    Replaced,
    /// The anchor was absent and the block was inserted at the fallback point
    Inserted,
    /// Neither the anchor nor a fallback point exists; text is unchanged
    AnchorNotFound,
}

/// Result of applying one patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// The patched document
    pub text: String,
    /// Number of anchors rewritten
    pub replacements: usize,
    pub action: PatchAction,
}

impl PatchOutcome {
    pub(crate) fn replaced(text: String, replacements: usize) -> Self {
        Self {
            text,
            replacements,
            action: PatchAction::Replaced,
        }
    }

    pub(crate) fn inserted(text: String) -> Self {
        Self {
            text,
            replacements: 1,
            action: PatchAction::Inserted,
        }
    }

    pub(crate) fn not_found(document: &str) -> Self {
        Self {
            text: document.to_string(),
            replacements: 0,
            action: PatchAction::AnchorNotFound,
        }
    }

    /// Returns `true` if the patched text differs from `original`.
    #[must_use]
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }

    #[must_use]
    pub fn found(&self) -> bool {
        self.action != PatchAction::AnchorNotFound
    }
}

// ============================================================================
// Patcher
// ============================================================================

/// Applies anchored, idempotent edits to a text document.
///
/// Implementations never touch bytes outside the matched span.
pub trait DocumentPatcher {
    /// Replaces the region between two `block` markers with `payload`.
    ///
    /// Without a marker pair the block is inserted right after the
    /// document's frontmatter; a document with neither is left unchanged.
    fn replace_block(&self, document: &str, block: &MarkerBlock, payload: &str) -> PatchOutcome;

    /// Replaces the scalar value at `target`, keeping the key, its
    /// indentation and any trailing comment.
    fn replace_value(&self, document: &str, target: &KeyTarget, value: &str) -> PatchOutcome;

    /// Rewrites `file: {folder}/{prefix}-*.md` references to
    /// `file: {folder}/{file_name}`.
    fn rewrite_file_refs(
        &self,
        document: &str,
        folder: &str,
        prefix: &str,
        file_name: &str,
    ) -> PatchOutcome;
}
