//! Course program page (`programa.md`).

use coursegen_core::config::CourseConfig;
use coursegen_core::labels::Labels;

use crate::render::DEFAULT_COURSE_TITLE;
use crate::render::frontmatter::quote_yaml_string;

const DEFAULT_SEMESTER: &str = "Semester";
const DEFAULT_UNIVERSITY: &str = "University";
const DEFAULT_CODE: &str = "CODE";
const DEFAULT_DESCRIPTION: &str = "No description provided.";
const DEFAULT_AUTHOR: &str = "Instructor";

/// Renders the program page: metadata header, course sections with
/// placeholders, and a week-by-week schedule.
#[must_use]
pub fn render_program(course: &CourseConfig, labels: &Labels) -> String {
    let meta = &course.metadata;
    let title = meta.title.as_deref().unwrap_or(DEFAULT_COURSE_TITLE);
    let semester = meta.semester.as_deref().unwrap_or(DEFAULT_SEMESTER);
    let university = meta.university.as_deref().unwrap_or(DEFAULT_UNIVERSITY);
    let code = meta.code.as_deref().unwrap_or(DEFAULT_CODE);
    let description = meta.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
    let author = meta.first_author().unwrap_or(DEFAULT_AUTHOR);

    let mut lines = vec![
        "---".to_string(),
        format!("title: {}", quote_yaml_string(title)),
        format!("subtitle: {}", quote_yaml_string(semester)),
        format!("author: {}", quote_yaml_string(author)),
        "---".to_string(),
        String::new(),
        format!("# {title}"),
        String::new(),
        "|  |  |".to_string(),
        "| :--- | :--- |".to_string(),
        format!("| **{}** | {university} |", labels.university),
        format!("| **{}** | {code} |", labels.code),
        format!("| **{}** | {semester} |", labels.semester),
        String::new(),
    ];

    for (emoji, heading, body) in [
        ("📝", labels.description, description),
        ("🎯", labels.objectives, labels.placeholder_objectives),
        ("🧠", labels.methodology, labels.placeholder_methodology),
        ("📊", labels.evaluation, labels.placeholder_evaluation),
    ] {
        lines.push(format!("## {emoji} {heading}"));
        lines.push(String::new());
        lines.push(body.to_string());
        lines.push(String::new());
    }

    lines.push(format!("## 📅 {}", labels.schedule));
    lines.push(String::new());

    if !course.weeks.is_empty() {
        lines.push(format!(
            "| {} | {} | {} |",
            labels.week, labels.title, labels.content
        ));
        lines.push("| :--- | :--- | :--- |".to_string());
        for entry in &course.weeks {
            let number = entry.week.map_or_else(|| "?".to_string(), |n| n.to_string());
            let week_title = entry.title.as_deref().unwrap_or_default();
            let content = entry.content.join(", ").replace('|', "-");
            lines.push(format!("| {number} | {week_title} | {content} |"));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_core::labels::Lang;

    #[test]
    fn test_defaults_for_empty_metadata() {
        let page = render_program(&CourseConfig::default(), Lang::En.labels());
        assert!(page.starts_with(
            "---\ntitle: Course Title\nsubtitle: Semester\nauthor: Instructor\n---\n\n# Course Title\n"
        ));
        assert!(page.contains("| **University** | University |"));
        assert!(page.contains("| **Code** | CODE |"));
        assert!(page.contains("## 📝 Description\n\nNo description provided.\n"));
        assert!(page.contains("## 📅 Schedule\n"));
        assert!(!page.contains("| :--- | :--- | :--- |"));
    }

    #[test]
    fn test_schedule_rows() {
        let course: CourseConfig = serde_json::from_str(
            r#"{
                "metadata": {"title": "Física I", "code": "FI1105", "authors": ["Ada", "Bob"]},
                "weeks": [
                    {"week": 1, "title": "Intro", "content": ["Unidades", "a|b"]},
                    {"title": "Sin número"}
                ]
            }"#,
        )
        .unwrap();
        let page = render_program(&course, Lang::Es.labels());
        assert!(page.contains("author: Ada\n"));
        assert!(page.contains("| Semana | Título | Contenido |\n| :--- | :--- | :--- |\n"));
        assert!(page.contains("| 1 | Intro | Unidades, a-b |\n"));
        assert!(page.contains("| ? | Sin número |  |\n"));
    }

    #[test]
    fn test_title_with_colon_is_quoted_in_frontmatter() {
        let course: CourseConfig =
            serde_json::from_str(r#"{"metadata": {"title": "Física: Mecánica"}, "weeks": []}"#)
                .unwrap();
        let page = render_program(&course, Lang::Es.labels());
        assert!(page.contains("title: \"Física: Mecánica\"\n"));
        assert!(page.contains("# Física: Mecánica\n"));
    }
}
