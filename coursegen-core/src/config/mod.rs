//! Course plan schema and loading.

pub mod loader;
pub mod schema;

pub use loader::{DEFAULT_PLAN_FILE, LoadedCourse, load_course, parse_course};
pub use schema::{CourseConfig, CourseMetadata, EvaluationItem, Reference, WeekEntry};
