//! Page renderers.
//!
//! Renderers are pure: they take the course plan and a label set and
//! return the page text. Writing files is left to [`crate::steps`].

pub mod activity;
pub mod badges;
pub mod frontmatter;
pub mod program;
pub mod session;
pub mod table;

/// Course title used when the plan's metadata has none.
pub const DEFAULT_COURSE_TITLE: &str = "Course Title";
