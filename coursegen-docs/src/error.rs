//! Error types for `coursegen` page generation.

use std::path::{Path, PathBuf};

use coursegen_core::error::SlugError;
use thiserror::Error;

/// Errors that can occur while rendering or writing course documents.
#[derive(Debug, Error)]
pub enum DocsError {
    /// A title or description could not be turned into a file name.
    #[error(transparent)]
    Slug(#[from] SlugError),

    /// I/O error on a specific file or directory.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization or frontmatter parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid file-scan pattern.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl DocsError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
