//! Site configuration steps: create, sync metadata, relink sessions.

use std::fs;

use coursegen_core::config::CourseConfig;
use coursegen_core::labels::Labels;

use crate::error::DocsError;
use crate::layout::ProjectLayout;
use crate::output::{WritePolicy, read_document, write_output};
use crate::patch::DocumentPatcher;
use crate::report::{FileReport, FileStatus};
use crate::site::SiteMetadata;
use crate::site::config::render_site_config;
use crate::site::sync::sync_site_metadata;
use crate::site::toc::{relink_sessions, scan_session_files};

/// Creates `myst.yml` from the plan unless it already exists.
///
/// # Errors
///
/// Returns `DocsError` if the configuration cannot be rendered or written.
pub fn init_site_config(
    course: &CourseConfig,
    labels: &Labels,
    layout: &ProjectLayout,
    year: i32,
) -> Result<FileReport, DocsError> {
    let path = layout.site_config();
    if path.exists() {
        return Ok(FileReport::new(path, FileStatus::Skipped));
    }
    let site = SiteMetadata::from_course(&course.metadata, labels, year);
    let config = render_site_config(course, labels, &site)?;
    let outcome = write_output(&path, &config, WritePolicy::Skip)?;
    Ok(FileReport::new(path, outcome.into()))
}

/// Brings the metadata of an existing `myst.yml` in line with the plan.
///
/// Returns the file's report followed by one warning per required key
/// that could not be found. A missing configuration or a plan without
/// metadata is a warning, not an error.
///
/// # Errors
///
/// Returns `DocsError::Io` if the configuration cannot be read or written.
pub fn sync_site_config(
    course: &CourseConfig,
    labels: &Labels,
    layout: &ProjectLayout,
    year: i32,
    patcher: &dyn DocumentPatcher,
) -> Result<Vec<FileReport>, DocsError> {
    let path = layout.site_config();
    if !path.exists() {
        return Ok(vec![
            FileReport::new(path, FileStatus::Warning).with_detail("not found, nothing to sync"),
        ]);
    }
    if course.metadata.is_empty() {
        return Ok(vec![
            FileReport::new(path, FileStatus::Warning)
                .with_detail("course plan has no metadata, nothing to sync"),
        ]);
    }

    let document = read_document(&path)?;
    let site = SiteMetadata::from_course(&course.metadata, labels, year);
    let result = sync_site_metadata(&document, &site, patcher);

    let status = if result.text == document {
        FileStatus::Unchanged
    } else {
        fs::write(&path, &result.text).map_err(|e| DocsError::io(&path, e))?;
        FileStatus::Updated
    };

    let mut reports = vec![FileReport::new(&path, status)];
    reports.extend(result.missing.iter().map(|target| {
        FileReport::new(&path, FileStatus::Warning).with_detail(format!("key {target} not found"))
    }));
    Ok(reports)
}

/// Relinks session entries of `myst.yml` to the session pages on disk.
///
/// # Errors
///
/// Returns `DocsError` if the configuration cannot be read or written, or
/// the sessions directory cannot be scanned.
pub fn update_site_toc(
    layout: &ProjectLayout,
    patcher: &dyn DocumentPatcher,
) -> Result<Vec<FileReport>, DocsError> {
    let path = layout.site_config();
    if !path.exists() {
        return Ok(vec![
            FileReport::new(path, FileStatus::Warning).with_detail("not found, nothing to relink"),
        ]);
    }

    let files = scan_session_files(&layout.sessions_dir())?;
    let document = read_document(&path)?;
    let update = relink_sessions(&document, &files, patcher);

    let mut reports = Vec::new();
    if update.text == document {
        reports.push(FileReport::new(&path, FileStatus::Unchanged));
    } else {
        fs::write(&path, &update.text).map_err(|e| DocsError::io(&path, e))?;
        reports.push(
            FileReport::new(&path, FileStatus::Updated)
                .with_detail(format!("relinked {}", update.relinked.join(", "))),
        );
    }
    reports.extend(update.ambiguous.iter().map(|prefix| {
        FileReport::new(&path, FileStatus::Warning)
            .with_detail(format!("several session files for week {prefix}, left as is"))
    }));
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::TextPatcher;
    use coursegen_core::labels::Lang;

    fn course(title: &str) -> CourseConfig {
        serde_json::from_str(&format!(
            r#"{{"metadata": {{"title": "Física", "code": "FI1105", "semester": "II Semestre 2025", "authors": ["Ada"]}},
                "weeks": [{{"week": 1, "title": "{title}"}}]}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_init_then_sync_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let labels = Lang::Es.labels();

        let created = init_site_config(&course("Intro"), labels, &layout, 2000).unwrap();
        assert_eq!(created.status, FileStatus::Created);
        let before = fs::read_to_string(layout.site_config()).unwrap();

        let synced =
            sync_site_config(&course("Intro"), labels, &layout, 2000, &TextPatcher).unwrap();
        assert_eq!(synced.len(), 1);
        assert_eq!(synced[0].status, FileStatus::Unchanged);
        assert_eq!(fs::read_to_string(layout.site_config()).unwrap(), before);

        let again = init_site_config(&course("Intro"), labels, &layout, 2000).unwrap();
        assert_eq!(again.status, FileStatus::Skipped);
    }

    #[test]
    fn test_sync_after_init_keeps_numeric_code_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let labels = Lang::En.labels();
        let course: CourseConfig = serde_json::from_str(
            r#"{"metadata": {"code": "1105", "semester": "2025", "authors": ["Ada"]},
                "weeks": [{"week": 1, "title": "Intro"}]}"#,
        )
        .unwrap();

        init_site_config(&course, labels, &layout, 2000).unwrap();
        let before = fs::read_to_string(layout.site_config()).unwrap();
        let synced = sync_site_config(&course, labels, &layout, 2000, &TextPatcher).unwrap();
        assert_eq!(synced[0].status, FileStatus::Unchanged);
        assert_eq!(fs::read_to_string(layout.site_config()).unwrap(), before);

        let config: serde_yaml::Value = serde_yaml::from_str(&before).unwrap();
        assert_eq!(config["project"]["title"].as_str(), Some("1105"));
        assert_eq!(config["site"]["subtitle"].as_str(), Some("2025"));
    }

    #[test]
    fn test_sync_preserves_hand_edits() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        fs::write(
            layout.site_config(),
            "# my notes\nproject:\n  title: Old  # header\n  subtitle: x\n  authors:\n    - name: y\n  extra: kept\nsite:\n  title: Old\n  subtitle: x\n",
        )
        .unwrap();

        let reports =
            sync_site_config(&course("Intro"), Lang::Es.labels(), &layout, 2000, &TextPatcher)
                .unwrap();
        assert_eq!(reports[0].status, FileStatus::Updated);
        assert_eq!(
            fs::read_to_string(layout.site_config()).unwrap(),
            "# my notes\nproject:\n  title: FI1105  # header\n  subtitle: II Semestre 2025\n  authors:\n    - name: Ada\n  extra: kept\nsite:\n  title: FI1105\n  subtitle: II Semestre 2025\n"
        );
    }

    #[test]
    fn test_sync_without_config_warns() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let reports =
            sync_site_config(&course("Intro"), Lang::Es.labels(), &layout, 2000, &TextPatcher)
                .unwrap();
        assert_eq!(reports[0].status, FileStatus::Warning);
        assert!(!layout.site_config().exists());
    }

    #[test]
    fn test_sync_without_metadata_warns() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        fs::write(layout.site_config(), "project:\n  title: Mine\n").unwrap();
        let course: CourseConfig = serde_json::from_str(r#"{"weeks": []}"#).unwrap();

        let reports =
            sync_site_config(&course, Lang::En.labels(), &layout, 2000, &TextPatcher).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status, FileStatus::Warning);
        assert_eq!(
            fs::read_to_string(layout.site_config()).unwrap(),
            "project:\n  title: Mine\n"
        );
    }

    #[test]
    fn test_toc_follows_renamed_session() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let labels = Lang::Es.labels();
        init_site_config(&course("Intro"), labels, &layout, 2000).unwrap();
        assert!(
            fs::read_to_string(layout.site_config())
                .unwrap()
                .contains("sessions/01-intro.md")
        );

        fs::create_dir(layout.sessions_dir()).unwrap();
        fs::write(layout.sessions_dir().join("01-movimiento.md"), "x").unwrap();

        let reports = update_site_toc(&layout, &TextPatcher).unwrap();
        assert_eq!(reports[0].status, FileStatus::Updated);
        let config = fs::read_to_string(layout.site_config()).unwrap();
        assert!(config.contains("sessions/01-movimiento.md"));
        assert!(!config.contains("sessions/01-intro.md"));

        let again = update_site_toc(&layout, &TextPatcher).unwrap();
        assert_eq!(again[0].status, FileStatus::Unchanged);
    }
}
