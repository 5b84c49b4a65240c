//! `coursegen` Docs - page generation and document patching
//!
//! Renders session pages, activity skeletons, the program page and the
//! sessions table from a course plan, creates the MyST site configuration,
//! and keeps hand-edited files in sync through anchored text patches.

pub mod error;
pub mod layout;
pub mod output;
pub mod patch;
pub mod render;
pub mod report;
pub mod site;
pub mod steps;
