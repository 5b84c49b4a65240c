//! Observability module
//!
//! Diagnostic logging for `coursegen` runs. File status lines go to stdout
//! and are not part of this module.

pub mod logging;

pub use logging::{LogFormat, init_logging};
