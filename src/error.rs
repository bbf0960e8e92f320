//! Error types
//!
//! A single library error enum. Functions that report recoverable outcomes
//! (bad root, directory passed to `line_count`) return it directly; the
//! propagating entry points in [`crate::strict`] wrap it in `anyhow`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by listing and line-scanning operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// The listing root does not exist or is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// A line operation was pointed at a directory.
    #[error("is a directory: {}", path.display())]
    IsADirectory { path: PathBuf },

    /// `head`/`tail` called with a non-positive line count.
    #[error("line count must be a positive integer, got {count}")]
    InvalidCount { count: usize },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// A caller-supplied predicate returned an error.
    #[error("filter predicate failed on {candidate}: {source}")]
    Predicate {
        candidate: String,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed below the root.
    #[error("walk failed at {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl FsError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        FsError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn walk(root: &Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        FsError::Walk { path, source }
    }
}

impl From<config::ConfigError> for FsError {
    fn from(err: config::ConfigError) -> Self {
        FsError::Config(err.to_string())
    }
}
