//! Paths of a course project.
//!
//! All generators resolve their output locations through [`ProjectLayout`]
//! so the directory names are defined in exactly one place.

use std::path::{Path, PathBuf};

use coursegen_core::config::DEFAULT_PLAN_FILE;

/// Directory holding one page per session.
pub const SESSIONS_DIR: &str = "sessions";
/// Directory holding one page per activity.
pub const ACTIVITIES_DIR: &str = "activities";
/// Directory for worked examples.
pub const EXAMPLES_DIR: &str = "examples";
/// Directory for exercise sets.
pub const EXERCISES_DIR: &str = "exercises";
/// Directory for site assets such as logos.
pub const ASSETS_DIR: &str = "assets";

/// MyST site configuration file.
pub const SITE_CONFIG_FILE: &str = "myst.yml";
/// Course program page.
pub const PROGRAM_FILE: &str = "programa.md";
/// Sessions overview table.
pub const SESSIONS_TABLE_FILE: &str = "sessions_table.md";

/// Resolved locations of every file and directory a run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    plan: PathBuf,
}

impl ProjectLayout {
    /// Creates a layout rooted at `root` with the plan at its default path.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let plan = root.join(DEFAULT_PLAN_FILE);
        Self { root, plan }
    }

    /// Overrides the course plan location.
    #[must_use]
    pub fn with_plan(mut self, plan: impl Into<PathBuf>) -> Self {
        self.plan = plan.into();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn plan(&self) -> &Path {
        &self.plan
    }

    #[must_use]
    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join(SESSIONS_DIR)
    }

    #[must_use]
    pub fn activities_dir(&self) -> PathBuf {
        self.root.join(ACTIVITIES_DIR)
    }

    #[must_use]
    pub fn site_config(&self) -> PathBuf {
        self.root.join(SITE_CONFIG_FILE)
    }

    #[must_use]
    pub fn program(&self) -> PathBuf {
        self.root.join(PROGRAM_FILE)
    }

    #[must_use]
    pub fn sessions_table(&self) -> PathBuf {
        self.root.join(SESSIONS_TABLE_FILE)
    }

    /// Directories created by the scaffold run, in creation order.
    #[must_use]
    pub fn scaffold_dirs(&self) -> Vec<PathBuf> {
        [
            SESSIONS_DIR,
            ACTIVITIES_DIR,
            EXAMPLES_DIR,
            EXERCISES_DIR,
            ASSETS_DIR,
        ]
        .iter()
        .map(|dir| self.root.join(dir))
        .collect()
    }

    /// Returns `path` relative to the project root for display.
    #[must_use]
    pub fn display<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
