//! Activity skeleton pages.

use coursegen_core::error::SlugError;
use coursegen_core::labels::Labels;
use coursegen_core::slug::assign_filenames;

use crate::render::frontmatter::double_quoted;

/// Longest activity title kept verbatim, in characters.
pub const MAX_TITLE_CHARS: usize = 60;

/// Default duration written into new activity pages.
pub const DEFAULT_DURATION: &str = "60 min";

/// Derives a short title from an activity description.
///
/// Takes the text before the first `.`; titles longer than
/// [`MAX_TITLE_CHARS`] are cut to 57 characters plus `...`.
#[must_use]
pub fn activity_title(description: &str) -> String {
    let first = description.split('.').next().unwrap_or_default().trim();
    if first.chars().count() > MAX_TITLE_CHARS {
        let cut: String = first.chars().take(MAX_TITLE_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}

/// File names of a week's activities.
///
/// Session pages, activity generation and the site table of contents all
/// go through this function, so their links agree.
#[must_use]
pub fn activity_filenames(week: u32, activities: &[String]) -> Vec<Result<String, SlugError>> {
    assign_filenames(week, activities)
}

/// Renders the skeleton page for one activity.
#[must_use]
pub fn render_activity(description: &str, labels: &Labels) -> String {
    let lines = [
        "---".to_string(),
        format!("title: {}", double_quoted(&activity_title(description))),
        format!("duration: {}", double_quoted(DEFAULT_DURATION)),
        format!("modality: {}", double_quoted(labels.modality)),
        format!("difficulty: {}", double_quoted(labels.difficulty)),
        "---".to_string(),
        String::new(),
        format!("## 📝 {}", labels.description),
        description.to_string(),
        String::new(),
        format!("## 🎯 {}", labels.objectives),
        format!("*   {}", labels.default_objective),
        String::new(),
        format!("## 🛠️ {}", labels.materials),
        format!("*   {}", labels.default_material),
        String::new(),
        format!("## 📄 {}", labels.instructions),
        format!("1.  [{} 1]", labels.step),
        format!("2.  [{} 2]", labels.step),
        String::new(),
    ];
    lines.join("\n")
}
