//! Per-file results of a generation step.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::output::WriteOutcome;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Created,
    Overwritten,
    Skipped,
    /// An existing file was patched in place.
    Updated,
    /// An existing file already matched the plan.
    Unchanged,
    /// The file was handled, but something was missing or odd.
    Warning,
    /// The file could not be produced; later files were still processed.
    Failed,
}

impl FileStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Skipped => "skipped",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
            Self::Warning => "warning",
            Self::Failed => "error",
        }
    }

    /// Returns `true` for statuses that count as a failed file.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<WriteOutcome> for FileStatus {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Created => Self::Created,
            WriteOutcome::Overwritten => Self::Overwritten,
            WriteOutcome::Skipped => Self::Skipped,
        }
    }
}

/// The result for one file of a generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Extra context, e.g. the error message of a failed file
    pub detail: Option<String>,
}

impl FileReport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn failed(path: &Path, detail: impl fmt::Display) -> Self {
        Self::new(path, FileStatus::Failed).with_detail(detail.to_string())
    }
}

/// Counts reports with a failed status.
#[must_use]
pub fn failure_count(reports: &[FileReport]) -> usize {
    reports.iter().filter(|r| r.status.is_failure()).count()
}
