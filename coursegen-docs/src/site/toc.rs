//! Relinking session entries in the site table of contents.
//!
//! Renaming a session title renames its page. The table of contents still
//! points at the old name, so each `file: sessions/NN-*.md` reference is
//! rewritten to whatever page currently exists for week `NN`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::DocsError;
use crate::layout::SESSIONS_DIR;
use crate::patch::DocumentPatcher;

/// File-name pattern of session pages.
pub const SESSION_FILE_PATTERN: &str = "[0-9][0-9]-*.md";

/// Lists session page names in `dir`, sorted.
///
/// A missing directory yields an empty list.
///
/// # Errors
///
/// Returns `DocsError::Pattern` if the directory path cannot be turned
/// into a glob pattern.
pub fn scan_session_files(dir: &Path) -> Result<Vec<String>, DocsError> {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{base}/{SESSION_FILE_PATTERN}");

    let mut files: Vec<String> = glob::glob(&pattern)?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    files.sort();
    Ok(files)
}

/// Result of relinking the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocUpdate {
    pub text: String,
    /// Session files whose references changed
    pub relinked: Vec<String>,
    /// Week prefixes with more than one session file; left untouched
    pub ambiguous: Vec<String>,
}

/// Rewrites session references in `document` to the given file names.
pub fn relink_sessions(
    document: &str,
    session_files: &[String],
    patcher: &dyn DocumentPatcher,
) -> TocUpdate {
    let mut by_prefix: BTreeMap<&str, Vec<&String>> = BTreeMap::new();
    for file in session_files {
        if let Some(prefix) = file.get(..2) {
            by_prefix.entry(prefix).or_default().push(file);
        }
    }

    let mut text = document.to_string();
    let mut relinked = Vec::new();
    let mut ambiguous = Vec::new();

    for (prefix, files) in by_prefix {
        let [file] = files.as_slice() else {
            ambiguous.push(prefix.to_string());
            continue;
        };
        let outcome = patcher.rewrite_file_refs(&text, SESSIONS_DIR, prefix, file);
        if outcome.changed(&text) {
            relinked.push((*file).clone());
            text = outcome.text;
        }
    }

    TocUpdate {
        text,
        relinked,
        ambiguous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::TextPatcher;
    use std::fs;

    const MYST: &str = "\
project:
  toc:
    - file: programa.md
    - title: Semana 1
      children:
        - file: sessions/01-old-name.md
        - file: activities/01-lab.md
    - title: Semana 2
      children:
        - file: sessions/02-vectores.md
";

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_relink_renamed_session() {
        let update = relink_sessions(
            MYST,
            &names(&["01-new-name.md", "02-vectores.md"]),
            &TextPatcher,
        );
        assert_eq!(update.relinked, vec!["01-new-name.md".to_string()]);
        assert!(update.text.contains("- file: sessions/01-new-name.md\n"));
        assert!(update.text.contains("- file: activities/01-lab.md\n"));
        assert!(update.ambiguous.is_empty());
    }

    #[test]
    fn test_relink_is_idempotent() {
        let files = names(&["01-new-name.md", "02-vectores.md"]);
        let once = relink_sessions(MYST, &files, &TextPatcher);
        let twice = relink_sessions(&once.text, &files, &TextPatcher);
        assert_eq!(twice.text, once.text);
        assert!(twice.relinked.is_empty());
    }

    #[test]
    fn test_duplicate_prefix_is_ambiguous() {
        let update = relink_sessions(
            MYST,
            &names(&["01-a.md", "01-b.md"]),
            &TextPatcher,
        );
        assert_eq!(update.ambiguous, vec!["01".to_string()]);
        assert_eq!(update.text, MYST);
    }

    #[test]
    fn test_scan_session_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["02-b.md", "01-a.md", "notes.md", "1-short.md", "03-c.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("04-dir.md")).unwrap();
        let files = scan_session_files(dir.path()).unwrap();
        assert_eq!(files, names(&["01-a.md", "02-b.md"]));
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let files = scan_session_files(&dir.path().join("sessions")).unwrap();
        assert!(files.is_empty());
    }
}
