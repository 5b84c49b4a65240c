//! Core error types for `coursegen`
//!
//! Course loading and naming error types shared across the workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Course plan loading errors.
///
/// Every variant is fatal for a run: without a readable plan no output can
/// be produced. Problems confined to a single week entry are reported as
/// [`EntryIssue`]s instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the course plan
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Course plan not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// The document parsed as JSON but has an unusable top-level shape
    #[error("invalid course plan in {path}: expected an object or an array, got {found}")]
    InvalidFormat {
        /// Path to the course plan
        path: PathBuf,
        /// Kind of JSON value found at the top level
        found: &'static str,
    },

    /// The course plan exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path to the course plan
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Naming Errors
// ============================================================================

/// Filename generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    /// Nothing filename-safe was left after sanitizing the text
    #[error("text {text:?} produces an empty slug")]
    EmptySlug {
        /// The text that was slugified
        text: String,
    },
}

// ============================================================================
// Entry Issues
// ============================================================================

/// A problem confined to one week entry of the course plan.
///
/// Issues never abort loading; the CLI logs them and carries on with the
/// remaining entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryIssue {
    /// Location of the problem (e.g., `weeks[2].objectives`)
    pub location: String,
    /// Description of the problem
    pub message: String,
    /// Whether the entry was dropped or merely flagged
    pub severity: Severity,
}

impl std::fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.location)
    }
}

/// Severity level for entry issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The entry could not be used and was dropped
    Error,
    /// The entry is usable but looks suspicious
    Warning,
}
