//! Configuration types for building include/exclude matchers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::glob_path::GlobPath;
use crate::list::list_files;
use crate::matcher::{Any, Matcher};
use crate::name::Name;

/// Name regexes and path globs that together form one matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesPathsConfig {
    /// Regular expressions matched against each path component.
    pub names: Vec<String>,

    /// Glob patterns matched against the path and its parents.
    pub paths: Vec<String>,
}

impl NamesPathsConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name regex.
    pub fn name(mut self, pattern: impl Into<String>) -> Self {
        self.names.push(pattern.into());
        self
    }

    /// Add a path glob.
    pub fn path(mut self, pattern: impl Into<String>) -> Self {
        self.paths.push(pattern.into());
        self
    }

    /// Whether the config has no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.paths.is_empty()
    }

    /// Build a matcher that matches if any name or path pattern matches.
    ///
    /// An empty config yields a matcher that matches nothing.
    pub fn matcher(&self) -> Result<Any> {
        let mut any = Any::default();
        if !self.names.is_empty() {
            any = any.with(Name::new(&self.names)?);
        }
        if !self.paths.is_empty() {
            any = any.with(GlobPath::new(&self.paths)?);
        }
        Ok(any)
    }
}

/// Include/exclude configuration for a file listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Paths to select.
    pub include: NamesPathsConfig,

    /// Paths to drop from the selection.
    pub exclude: NamesPathsConfig,
}

impl ListConfig {
    /// Create an empty config. It selects nothing until includes are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the include patterns.
    pub fn with_include(mut self, include: NamesPathsConfig) -> Self {
        self.include = include;
        self
    }

    /// Set the exclude patterns.
    pub fn with_exclude(mut self, exclude: NamesPathsConfig) -> Self {
        self.exclude = exclude;
        self
    }

    /// Parse a config from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading list config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// List the files under `dir` selected by this config.
    ///
    /// An empty include section means no include matcher, so nothing is
    /// listed. An empty exclude section excludes nothing.
    pub fn list_files(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let include = optional_matcher(&self.include)?;
        let exclude = optional_matcher(&self.exclude)?;

        list_files(
            dir,
            include.as_ref().map(|m| m as &dyn Matcher),
            exclude.as_ref().map(|m| m as &dyn Matcher),
        )
    }
}

fn optional_matcher(config: &NamesPathsConfig) -> Result<Option<Any>> {
    if config.is_empty() {
        Ok(None)
    } else {
        config.matcher().map(Some)
    }
}
