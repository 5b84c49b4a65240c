//! Badge injection into activity pages.

use std::fs;

use coursegen_core::labels::Labels;

use crate::error::DocsError;
use crate::layout::ProjectLayout;
use crate::output::read_document;
use crate::patch::{DocumentPatcher, MarkerBlock};
use crate::render::badges::ActivityMeta;
use crate::render::frontmatter::split_frontmatter;
use crate::report::{FileReport, FileStatus};
use crate::steps::markdown_files;

/// Inserts or refreshes the badge block of every activity page.
///
/// Pages without frontmatter are reported as skipped and pages without
/// badge metadata are left out of the report. The block is placed right
/// after the frontmatter and later runs rewrite it in place.
///
/// # Errors
///
/// Returns `DocsError::Pattern` if the activities directory cannot be
/// scanned.
pub fn inject_activity_badges(
    labels: &Labels,
    layout: &ProjectLayout,
    patcher: &dyn DocumentPatcher,
) -> Result<Vec<FileReport>, DocsError> {
    let dir = layout.activities_dir();
    if !dir.is_dir() {
        return Ok(vec![
            FileReport::new(dir, FileStatus::Warning).with_detail("directory not found"),
        ]);
    }

    let block = MarkerBlock::activity_badges();
    let mut reports = Vec::new();

    for path in markdown_files(&dir)? {
        let document = match read_document(&path) {
            Ok(text) => text,
            Err(e) => {
                reports.push(FileReport::failed(&path, e));
                continue;
            }
        };

        let Some(frontmatter) = split_frontmatter(&document) else {
            reports.push(FileReport::new(&path, FileStatus::Skipped).with_detail("no frontmatter"));
            continue;
        };
        let meta = match serde_yaml::from_str::<serde_yaml::Value>(frontmatter.yaml) {
            Ok(value) => ActivityMeta::from_frontmatter(&value),
            Err(e) => {
                reports.push(
                    FileReport::new(&path, FileStatus::Warning)
                        .with_detail(format!("invalid frontmatter: {e}")),
                );
                continue;
            }
        };
        if meta.is_empty() {
            continue;
        }

        let outcome = patcher.replace_block(&document, &block, &meta.badges(labels));
        let report = if !outcome.found() {
            FileReport::new(&path, FileStatus::Warning).with_detail("unpaired badge marker")
        } else if outcome.changed(&document) {
            match fs::write(&path, &outcome.text) {
                Ok(()) => FileReport::new(&path, FileStatus::Updated),
                Err(e) => FileReport::failed(&path, DocsError::io(&path, e)),
            }
        } else {
            FileReport::new(&path, FileStatus::Unchanged)
        };
        reports.push(report);
    }

    Ok(reports)
}
