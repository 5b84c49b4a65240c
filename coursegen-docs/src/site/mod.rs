//! MyST site configuration (`myst.yml`).
//!
//! The configuration is created once from the plan and afterwards only
//! patched in place, since authors edit it by hand.

pub mod config;
pub mod sync;
pub mod toc;

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use coursegen_core::config::CourseMetadata;
use coursegen_core::labels::Labels;
use coursegen_core::slug::slugify;

use crate::render::DEFAULT_COURSE_TITLE;

const DEFAULT_SUBTITLE: &str = "Semester";
const DEFAULT_AUTHOR: &str = "Instructor";
const DEFAULT_PROJECT_ID: &str = "course";

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("valid regex"));

/// Site-level values derived from the course metadata.
///
/// Both the initial configuration and later syncs use these values, so a
/// sync right after creation changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    /// Header title: the course code, else the course title
    pub title: String,
    /// Header subtitle: the semester
    pub subtitle: String,
    pub author: String,
    pub copyright: String,
    pub project_id: String,
    pub repository: Option<String>,
}

impl SiteMetadata {
    /// Derives site values from course metadata.
    ///
    /// The copyright year is the first four-digit number in the semester,
    /// else `current_year`.
    #[must_use]
    pub fn from_course(meta: &CourseMetadata, labels: &Labels, current_year: i32) -> Self {
        let title = single_line(
            meta.code
                .as_deref()
                .or(meta.title.as_deref())
                .unwrap_or(DEFAULT_COURSE_TITLE),
        );
        let subtitle = single_line(meta.semester.as_deref().unwrap_or(DEFAULT_SUBTITLE));
        let author = single_line(meta.first_author().unwrap_or(DEFAULT_AUTHOR));
        let year = meta
            .semester
            .as_deref()
            .and_then(|s| YEAR.find(s))
            .map_or_else(|| current_year.to_string(), |m| m.as_str().to_string());
        let copyright = format!("© {year} {author}. {}", labels.copyright_notice);

        let id = slugify(&title);
        let project_id = if id.is_empty() {
            DEFAULT_PROJECT_ID.to_string()
        } else {
            id
        };

        Self {
            title,
            subtitle,
            author,
            copyright,
            project_id,
            repository: meta.repository.clone(),
        }
    }
}

/// Header fields are single-line; whitespace runs collapse to one space.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The current local calendar year.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
