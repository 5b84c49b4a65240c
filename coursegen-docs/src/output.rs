//! File output with an explicit overwrite policy.

use std::fs;
use std::path::Path;

use crate::error::DocsError;

/// What to do when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Leave the existing file untouched.
    #[default]
    Skip,
    /// Replace the existing file.
    Overwrite,
}

impl WritePolicy {
    /// Maps a `--force` flag to a policy.
    #[must_use]
    pub const fn from_force(force: bool) -> Self {
        if force { Self::Overwrite } else { Self::Skip }
    }
}

/// Result of a single [`write_output`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was written.
    Created,
    /// The file existed and was replaced.
    Overwritten,
    /// The file existed and was left untouched.
    Skipped,
}

/// Writes `content` to `path` according to `policy`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns `DocsError::Io` if the file cannot be written.
pub fn write_output(
    path: &Path,
    content: &str,
    policy: WritePolicy,
) -> Result<WriteOutcome, DocsError> {
    let existed = path.exists();
    if existed && policy == WritePolicy::Skip {
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| DocsError::io(path, e))?;

    Ok(if existed {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    })
}

/// Creates `dir` and its parents if missing.
///
/// Returns `true` if the directory was created by this call.
///
/// # Errors
///
/// Returns `DocsError::Io` if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<bool, DocsError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|e| DocsError::io(dir, e))?;
    Ok(true)
}

/// Reads a UTF-8 document.
///
/// # Errors
///
/// Returns `DocsError::Io` if the file cannot be read.
pub fn read_document(path: &Path) -> Result<String, DocsError> {
    fs::read_to_string(path).map_err(|e| DocsError::io(path, e))
}
