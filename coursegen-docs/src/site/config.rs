//! Initial `myst.yml` generation.

use serde::Serialize;

use coursegen_core::config::CourseConfig;
use coursegen_core::labels::Labels;

use crate::error::DocsError;
use crate::layout::{ACTIVITIES_DIR, ASSETS_DIR, PROGRAM_FILE, SESSIONS_DIR};
use crate::render::activity::activity_filenames;
use crate::render::session::session_filename;
use crate::site::SiteMetadata;

const MYST_VERSION: u32 = 1;
const SITE_TEMPLATE: &str = "book-theme";

#[derive(Debug, Serialize)]
struct MystConfig {
    version: u32,
    project: Project,
    site: Site,
}

#[derive(Debug, Serialize)]
struct Project {
    id: String,
    title: String,
    subtitle: String,
    authors: Vec<Author>,
    copyright: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    github: Option<String>,
    toc: Vec<TocEntry>,
}

#[derive(Debug, Serialize)]
struct Author {
    name: String,
}

/// One entry of the MyST table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TocEntry {
    File {
        file: String,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        hidden: bool,
    },
    Group {
        title: String,
        children: Vec<TocEntry>,
    },
}

#[derive(Debug, Serialize)]
struct Site {
    template: &'static str,
    options: SiteOptions,
    title: String,
    subtitle: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    actions: Vec<SiteAction>,
}

#[derive(Debug, Serialize)]
struct SiteOptions {
    logo: String,
    logo_dark: String,
}

#[derive(Debug, Serialize)]
struct SiteAction {
    title: &'static str,
    url: String,
    icon: &'static str,
}

/// Builds the table of contents: the program page, then one group per
/// numbered week with its session page and hidden activity pages.
///
/// Entries whose file name cannot be derived are left out.
#[must_use]
pub fn build_toc(course: &CourseConfig, labels: &Labels) -> Vec<TocEntry> {
    let mut toc = vec![TocEntry::File {
        file: PROGRAM_FILE.to_string(),
        hidden: false,
    }];

    for (week, entry) in course.numbered_weeks() {
        let mut children = Vec::new();
        if let Ok(name) = session_filename(week, entry, labels) {
            children.push(TocEntry::File {
                file: format!("{SESSIONS_DIR}/{name}"),
                hidden: false,
            });
        }
        children.extend(
            activity_filenames(week, &entry.activities)
                .into_iter()
                .flatten()
                .map(|name| TocEntry::File {
                    file: format!("{ACTIVITIES_DIR}/{name}"),
                    hidden: true,
                }),
        );
        toc.push(TocEntry::Group {
            title: format!("{} {week}", labels.week),
            children,
        });
    }

    toc
}

/// Renders the initial site configuration.
///
/// # Errors
///
/// Returns `DocsError::Yaml` if serialization fails.
pub fn render_site_config(
    course: &CourseConfig,
    labels: &Labels,
    site: &SiteMetadata,
) -> Result<String, DocsError> {
    let config = MystConfig {
        version: MYST_VERSION,
        project: Project {
            id: site.project_id.clone(),
            title: site.title.clone(),
            subtitle: site.subtitle.clone(),
            authors: vec![Author {
                name: site.author.clone(),
            }],
            copyright: site.copyright.clone(),
            github: site.repository.clone(),
            toc: build_toc(course, labels),
        },
        site: Site {
            template: SITE_TEMPLATE,
            options: SiteOptions {
                logo: format!("{ASSETS_DIR}/site_logo.svg"),
                logo_dark: format!("{ASSETS_DIR}/site_logo_dark.svg"),
            },
            title: site.title.clone(),
            subtitle: site.subtitle.clone(),
            actions: site
                .repository
                .iter()
                .map(|url| SiteAction {
                    title: "GitHub",
                    url: url.clone(),
                    icon: "github",
                })
                .collect(),
        },
    };
    Ok(serde_yaml::to_string(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_core::labels::Lang;
    use serde_yaml::Value;

    fn course() -> CourseConfig {
        serde_json::from_str(
            r#"{
                "metadata": {
                    "title": "Física I",
                    "code": "FI1105",
                    "semester": "I Semestre 2026",
                    "authors": ["Ada"],
                    "repository": "https://github.com/example/fi1105"
                },
                "weeks": [
                    {"week": 1, "title": "Intro", "activities": ["Lab 1", "Quiz"]},
                    {"title": "unnumbered"},
                    {"week": 2}
                ]
            }"#,
        )
        .unwrap()
    }

    fn rendered() -> Value {
        let course = course();
        let labels = Lang::Es.labels();
        let site = SiteMetadata::from_course(&course.metadata, labels, 2000);
        let text = render_site_config(&course, labels, &site).unwrap();
        serde_yaml::from_str(&text).unwrap()
    }

    #[test]
    fn test_project_fields() {
        let config = rendered();
        assert_eq!(config["version"].as_u64(), Some(1));
        assert_eq!(config["project"]["id"].as_str(), Some("fi1105"));
        assert_eq!(config["project"]["title"].as_str(), Some("FI1105"));
        assert_eq!(config["project"]["subtitle"].as_str(), Some("I Semestre 2026"));
        assert_eq!(config["project"]["authors"][0]["name"].as_str(), Some("Ada"));
        assert_eq!(
            config["project"]["github"].as_str(),
            Some("https://github.com/example/fi1105")
        );
        assert!(
            config["project"]["copyright"]
                .as_str()
                .unwrap()
                .starts_with("© 2026 Ada.")
        );
    }

    #[test]
    fn test_toc_structure() {
        let config = rendered();
        let toc = config["project"]["toc"].as_sequence().unwrap();
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[0]["file"].as_str(), Some("programa.md"));
        assert_eq!(toc[1]["title"].as_str(), Some("Semana 1"));
        assert_eq!(toc[1]["children"][0]["file"].as_str(), Some("sessions/01-intro.md"));
        assert!(toc[1]["children"][0].get("hidden").is_none());
        assert_eq!(toc[1]["children"][1]["file"].as_str(), Some("activities/01-lab-1.md"));
        assert_eq!(toc[1]["children"][1]["hidden"].as_bool(), Some(true));
        assert_eq!(toc[1]["children"][2]["file"].as_str(), Some("activities/01-quiz.md"));
        assert_eq!(toc[2]["children"][0]["file"].as_str(), Some("sessions/02-sesion-2.md"));
    }

    #[test]
    fn test_site_section() {
        let config = rendered();
        assert_eq!(config["site"]["template"].as_str(), Some("book-theme"));
        assert_eq!(config["site"]["options"]["logo"].as_str(), Some("assets/site_logo.svg"));
        assert_eq!(config["site"]["title"].as_str(), Some("FI1105"));
        assert_eq!(config["site"]["actions"][0]["icon"].as_str(), Some("github"));
    }

    #[test]
    fn test_no_repository_means_no_actions() {
        let mut course = course();
        course.metadata.repository = None;
        let labels = Lang::En.labels();
        let site = SiteMetadata::from_course(&course.metadata, labels, 2000);
        let text = render_site_config(&course, labels, &site).unwrap();
        assert!(!text.contains("actions"));
        assert!(!text.contains("github"));
    }
}
