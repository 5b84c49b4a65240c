//! Session, activity, program and table pages.

use coursegen_core::config::CourseConfig;
use coursegen_core::labels::Labels;

use crate::error::DocsError;
use crate::layout::ProjectLayout;
use crate::output::{WritePolicy, write_output};
use crate::render::activity::{activity_filenames, render_activity};
use crate::render::program::render_program;
use crate::render::session::{render_session, session_filename};
use crate::render::table::render_sessions_table;
use crate::report::{FileReport, FileStatus};
use crate::steps::prepare_dir;

/// Writes one session page per selected week.
///
/// # Errors
///
/// Returns `DocsError::Io` if the sessions directory cannot be created.
pub fn write_sessions(
    course: &CourseConfig,
    labels: &Labels,
    layout: &ProjectLayout,
    week: Option<u32>,
    policy: WritePolicy,
) -> Result<Vec<FileReport>, DocsError> {
    let dir = layout.sessions_dir();
    let mut reports = Vec::new();
    prepare_dir(&dir, &mut reports)?;

    for (number, entry) in course.select_weeks(week) {
        let name = match session_filename(number, entry, labels) {
            Ok(name) => name,
            Err(e) => {
                reports.push(FileReport::failed(&dir, format!("week {number}: {e}")));
                continue;
            }
        };
        let path = dir.join(name);
        let report = render_session(&course.metadata, number, entry, labels)
            .and_then(|page| write_output(&path, &page, policy))
            .map_or_else(
                |e| FileReport::failed(&path, e),
                |outcome| FileReport::new(&path, outcome.into()),
            );
        reports.push(report);
    }

    Ok(reports)
}

/// Writes one skeleton page per activity of the selected weeks.
///
/// # Errors
///
/// Returns `DocsError::Io` if the activities directory cannot be created.
pub fn write_activities(
    course: &CourseConfig,
    labels: &Labels,
    layout: &ProjectLayout,
    week: Option<u32>,
    policy: WritePolicy,
) -> Result<Vec<FileReport>, DocsError> {
    let dir = layout.activities_dir();
    let mut reports = Vec::new();
    prepare_dir(&dir, &mut reports)?;

    for (number, entry) in course.select_weeks(week) {
        let names = activity_filenames(number, &entry.activities);
        for (description, name) in entry.activities.iter().zip(names) {
            let name = match name {
                Ok(name) => name,
                Err(e) => {
                    reports.push(FileReport::failed(&dir, format!("week {number}: {e}")));
                    continue;
                }
            };
            let path = dir.join(name);
            let page = render_activity(description, labels);
            let report = write_output(&path, &page, policy).map_or_else(
                |e| FileReport::failed(&path, e),
                |outcome| FileReport::new(&path, outcome.into()),
            );
            reports.push(report);
        }
    }

    Ok(reports)
}

/// Writes the program page.
///
/// # Errors
///
/// Returns `DocsError::Io` if the page cannot be written.
pub fn write_program(
    course: &CourseConfig,
    labels: &Labels,
    layout: &ProjectLayout,
    policy: WritePolicy,
) -> Result<FileReport, DocsError> {
    let path = layout.program();
    let outcome = write_output(&path, &render_program(course, labels), policy)?;
    Ok(FileReport::new(path, outcome.into()))
}

/// Writes the sessions table, which is always regenerated.
///
/// # Errors
///
/// Returns `DocsError::Io` if the table cannot be written.
pub fn write_sessions_table(
    course: &CourseConfig,
    labels: &Labels,
    layout: &ProjectLayout,
) -> Result<FileReport, DocsError> {
    let path = layout.sessions_table();
    let table = render_sessions_table(course, labels);
    if std::fs::read_to_string(&path).is_ok_and(|current| current == table) {
        return Ok(FileReport::new(path, FileStatus::Unchanged));
    }
    let outcome = write_output(&path, &table, WritePolicy::Overwrite)?;
    Ok(FileReport::new(path, outcome.into()))
}
