//! Error types for path matching and file listing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for matcher operations.
pub type Result<T> = std::result::Result<T, MatcherError>;

/// Errors that can occur while building matchers or listing files.
#[derive(Error, Debug)]
pub enum MatcherError {
    /// The input directory could not be converted to an absolute path.
    #[error("failed to convert path {} to absolute path: {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolved directory could not be stat'ed.
    #[error("failed to stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolved path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A visited entry could not be expressed relative to the base.
    #[error("failed to resolve {} to relative path against base {}", path.display(), base.display())]
    RelativePath { path: PathBuf, base: PathBuf },

    /// The directory walk failed at an entry.
    #[error("walk failed at {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A name regex or path glob could not be compiled.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for MatcherError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
