//! Error types for the `coursegen` binary
//!
//! Aggregates the library errors and maps them to process exit codes.

use thiserror::Error;

use coursegen_core::error::ConfigError;
use coursegen_docs::error::DocsError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `coursegen` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error, including runs where some files failed
    pub const ERROR: i32 = 1;

    /// Course plan missing or unusable
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (permission denied, unwritable directory)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `coursegen` commands.
#[derive(Debug, Error)]
pub enum CourseGenError {
    /// Course plan loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rendering or output error
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// Terminal I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The run finished but some files could not be produced
    #[error("{failed} file(s) could not be generated")]
    Incomplete {
        /// Number of failed file reports
        failed: usize,
    },
}

impl CourseGenError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Docs(DocsError::Io { .. }) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Docs(_) | Self::Json(_) | Self::Incomplete { .. } => ExitCode::ERROR,
        }
    }
}
