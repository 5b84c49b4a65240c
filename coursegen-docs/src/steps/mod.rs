//! File-level generation steps.
//!
//! Each step renders or patches files under a [`ProjectLayout`] and returns
//! one [`FileReport`] per file it touched. A failure on one file is
//! recorded in its report and the step moves on to the next file; only
//! failures that prevent the step as a whole (e.g. an output directory
//! that cannot be created) are returned as errors.
//!
//! [`ProjectLayout`]: crate::layout::ProjectLayout
//! [`FileReport`]: crate::report::FileReport

pub mod badges;
pub mod pages;
pub mod site;

use std::path::Path;

use crate::error::DocsError;
use crate::output::ensure_dir;
use crate::report::{FileReport, FileStatus};

/// Creates `dir` if needed, recording a report when it was created.
pub(crate) fn prepare_dir(dir: &Path, reports: &mut Vec<FileReport>) -> Result<(), DocsError> {
    if ensure_dir(dir)? {
        reports.push(FileReport::new(dir, FileStatus::Created));
    }
    Ok(())
}

/// Lists `*.md` files directly inside `dir`, sorted.
pub(crate) fn markdown_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, DocsError> {
    let pattern = format!("{}/*.md", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut files: Vec<_> = glob::glob(&pattern)?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}
