//! Sessions overview table (`sessions_table.md`).

use coursegen_core::config::{CourseConfig, WeekEntry};
use coursegen_core::labels::Labels;

/// Renders the sessions table with one row per plan entry.
#[must_use]
pub fn render_sessions_table(course: &CourseConfig, labels: &Labels) -> String {
    let mut lines = vec![
        format!("## {}", labels.sessions_table),
        String::new(),
        format!(
            "| {} | {} | {} |",
            labels.week, labels.title, labels.objectives
        ),
        "|--------|--------|---------------------------|".to_string(),
    ];

    for entry in &course.weeks {
        let number = entry.week.map(|n| n.to_string()).unwrap_or_default();
        let title = escape_cell(&table_title(entry));
        let objectives = escape_cell(&objective_list(&entry.objectives));
        lines.push(format!("| {number} | {title} | {objectives} |"));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Drops a leading `"N."` numbering from a week title.
fn table_title(entry: &WeekEntry) -> String {
    let title = entry.title.as_deref().unwrap_or_default();
    let head: String = title.chars().take(3).collect();
    match title.split_once('.') {
        Some((_, rest)) if head.contains('.') => rest.trim().to_string(),
        _ => title.to_string(),
    }
}

fn objective_list(objectives: &[String]) -> String {
    if objectives.is_empty() {
        return String::new();
    }
    let items: String = objectives
        .iter()
        .map(|o| format!("<li>{o}</li>"))
        .collect();
    format!("<ul>{items}</ul>")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "&#124;")
}
