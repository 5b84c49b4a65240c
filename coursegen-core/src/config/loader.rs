//! Course plan loading
//!
//! Reads `planeamiento.json`, normalizes its top-level shape, and
//! deserializes each week entry on its own so a single malformed entry is
//! reported and dropped instead of failing the whole run.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::config::schema::{CourseConfig, CourseMetadata, WEEK_ENTRY_FIELDS, WeekEntry};
use crate::error::{ConfigError, EntryIssue, Severity};

/// Default course plan file name, relative to the project root.
pub const DEFAULT_PLAN_FILE: &str = "planeamiento.json";

/// A loaded course plan together with the problems found in its entries.
#[derive(Debug, Clone, Default)]
pub struct LoadedCourse {
    /// The usable part of the plan
    pub course: CourseConfig,
    /// Entry-level problems; none of them prevented loading
    pub issues: Vec<EntryIssue>,
}

/// Loads a course plan from disk.
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` if `path` does not exist,
/// `ConfigError::Io` if it cannot be read, and the errors of
/// [`parse_course`] for unusable content.
pub fn load_course(path: &Path) -> Result<LoadedCourse, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConfigError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_course(&text, path)
}

/// Parses course plan JSON.
///
/// Accepts the current shape (`{"metadata": …, "weeks": […]}`) and the
/// legacy shape (a bare array of week entries). An object with neither key
/// yields an empty course.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` for invalid JSON and
/// `ConfigError::InvalidFormat` when the top level is neither an object nor
/// an array.
pub fn parse_course(text: &str, path: &Path) -> Result<LoadedCourse, ConfigError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: Some(e.line()),
        message: e.to_string(),
    })?;

    let mut issues = Vec::new();

    let (metadata_value, week_values) = match value {
        Value::Array(items) => (None, items),
        Value::Object(mut map) => {
            if !map.contains_key("weeks") && !map.contains_key("metadata") {
                issues.push(EntryIssue {
                    location: "$".to_string(),
                    message: "no `weeks` or `metadata` key; the plan is empty".to_string(),
                    severity: Severity::Warning,
                });
                return Ok(LoadedCourse {
                    course: CourseConfig::default(),
                    issues,
                });
            }
            let weeks = match map.remove("weeks") {
                Some(Value::Array(items)) => items,
                None | Some(Value::Null) => Vec::new(),
                Some(other) => {
                    issues.push(EntryIssue {
                        location: "weeks".to_string(),
                        message: format!("expected an array, got {}", kind_of(&other)),
                        severity: Severity::Error,
                    });
                    Vec::new()
                }
            };
            (map.remove("metadata"), weeks)
        }
        other => {
            return Err(ConfigError::InvalidFormat {
                path: path.to_path_buf(),
                found: kind_of(&other),
            });
        }
    };

    let metadata = match metadata_value {
        None | Some(Value::Null) => CourseMetadata::default(),
        Some(v) => serde_json::from_value(v).unwrap_or_else(|e| {
            issues.push(EntryIssue {
                location: "metadata".to_string(),
                message: format!("{e}; metadata ignored"),
                severity: Severity::Error,
            });
            CourseMetadata::default()
        }),
    };

    let mut weeks = Vec::with_capacity(week_values.len());
    for (index, raw) in week_values.into_iter().enumerate() {
        let location = format!("weeks[{index}]");
        if let Value::Object(ref map) = raw {
            for key in map.keys() {
                if !WEEK_ENTRY_FIELDS.contains(&key.as_str()) {
                    issues.push(unknown_field_issue(&location, key));
                }
            }
        }

        match serde_json::from_value::<WeekEntry>(raw) {
            Ok(entry) => weeks.push(entry),
            Err(e) => issues.push(EntryIssue {
                location,
                message: format!("{e}; entry skipped"),
                severity: Severity::Error,
            }),
        }
    }

    issues.extend(duplicate_week_issues(&weeks));

    Ok(LoadedCourse {
        course: CourseConfig { metadata, weeks },
        issues,
    })
}

/// Suggest a known week-entry field for a misspelled key.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
#[must_use]
pub fn suggest_field(input: &str) -> Option<&'static str> {
    WEEK_ENTRY_FIELDS
        .iter()
        .map(|name| (*name, strsim::damerau_levenshtein(input, name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name)
}

fn unknown_field_issue(location: &str, key: &str) -> EntryIssue {
    let message = suggest_field(key).map_or_else(
        || format!("unknown field `{key}` ignored"),
        |s| format!("unknown field `{key}` ignored (did you mean `{s}`?)"),
    );
    EntryIssue {
        location: format!("{location}.{key}"),
        message,
        severity: Severity::Warning,
    }
}

fn duplicate_week_issues(weeks: &[WeekEntry]) -> Vec<EntryIssue> {
    let mut first_seen: HashMap<u32, usize> = HashMap::new();
    let mut issues = Vec::new();

    for (index, entry) in weeks.iter().enumerate() {
        let Some(number) = entry.number() else {
            continue;
        };
        if let Some(first) = first_seen.get(&number) {
            issues.push(EntryIssue {
                location: format!("weeks[{index}].week"),
                message: format!("week {number} already defined at weeks[{first}]"),
                severity: Severity::Warning,
            });
        } else {
            first_seen.insert(number, index);
        }
    }

    issues
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<LoadedCourse, ConfigError> {
        parse_course(text, Path::new("planeamiento.json"))
    }

    #[test]
    fn test_object_form() {
        let loaded = parse(
            r#"{"metadata": {"title": "Physics I", "code": "FI1105"},
                "weeks": [{"week": 1, "title": "Vectors"}]}"#,
        )
        .unwrap();
        assert_eq!(loaded.course.metadata.code.as_deref(), Some("FI1105"));
        assert_eq!(loaded.course.weeks.len(), 1);
        assert!(loaded.issues.is_empty());
    }

    #[test]
    fn test_legacy_array_form() {
        let loaded = parse(r#"[{"week": 1}, {"week": 2}]"#).unwrap();
        assert!(loaded.course.metadata.is_empty());
        assert_eq!(loaded.course.weeks.len(), 2);
    }

    #[test]
    fn test_object_without_known_keys_is_empty() {
        let loaded = parse(r#"{"course": []}"#).unwrap();
        assert!(loaded.course.weeks.is_empty());
        assert_eq!(loaded.issues.len(), 1);
        assert_eq!(loaded.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_scalar_top_level_rejected() {
        let err = parse("42").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat { found: "a number", .. }));
    }

    #[test]
    fn test_invalid_json_reports_line() {
        let err = parse("{\n\"weeks\": [\n").unwrap_err();
        match err {
            ConfigError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_entry_dropped_others_kept() {
        let loaded = parse(
            r#"{"weeks": [{"week": 1}, {"week": "two"}, {"week": 3, "objectives": ["a"]}]}"#,
        )
        .unwrap();
        let numbers: Vec<_> = loaded.course.weeks.iter().map(|w| w.week).collect();
        assert_eq!(numbers, vec![Some(1), Some(3)]);
        assert_eq!(loaded.issues.len(), 1);
        assert_eq!(loaded.issues[0].location, "weeks[1]");
        assert_eq!(loaded.issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_unknown_field_suggestion() {
        let loaded = parse(r#"{"weeks": [{"week": 1, "objectivs": ["a"]}]}"#).unwrap();
        assert_eq!(loaded.course.weeks.len(), 1);
        let issue = &loaded.issues[0];
        assert_eq!(issue.location, "weeks[0].objectivs");
        assert!(issue.message.contains("did you mean `objectives`"));
    }

    #[test]
    fn test_unknown_field_without_suggestion() {
        let loaded = parse(r#"{"weeks": [{"week": 1, "zzzzzzzzzzzz": 1}]}"#).unwrap();
        assert!(!loaded.issues[0].message.contains("did you mean"));
    }

    #[test]
    fn test_duplicate_week_warning() {
        let loaded = parse(r#"{"weeks": [{"week": 1}, {"week": 1}]}"#).unwrap();
        assert_eq!(loaded.course.weeks.len(), 2);
        assert_eq!(loaded.issues.len(), 1);
        assert!(loaded.issues[0].message.contains("already defined at weeks[0]"));
    }

    #[test]
    fn test_weeks_not_an_array() {
        let loaded = parse(r#"{"metadata": {}, "weeks": {"week": 1}}"#).unwrap();
        assert!(loaded.course.weeks.is_empty());
        assert_eq!(loaded.issues[0].location, "weeks");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_course(&dir.path().join("planeamiento.json")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PLAN_FILE);
        fs::write(&path, r#"[{"week": 4, "title": "Energy"}]"#).unwrap();
        let loaded = load_course(&path).unwrap();
        assert_eq!(loaded.course.weeks[0].title.as_deref(), Some("Energy"));
    }
}
