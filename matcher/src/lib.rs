//! # Path Matcher
//!
//! Recursive file listing filtered by pluggable include/exclude matchers.
//!
//! ## Features
//!
//! - **File Listing**: Walk a directory and collect relative paths
//! - **Matchers**: A one-method predicate trait, implemented by closures
//! - **Combinators**: `Any`, `All` and `Not` for composing matchers
//! - **Name/Path Patterns**: Regexes over path components, globs over paths
//! - **Configuration**: Serde/TOML include and exclude sections
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use path_matcher::{GlobPath, list_files};
//!
//! let include = |path: &Path| path.extension().is_some_and(|ext| ext == "rs");
//! let exclude = GlobPath::new(["target"])?;
//!
//! let files = list_files(".", Some(&include), Some(&exclude))?;
//! # Ok::<(), path_matcher::MatcherError>(())
//! ```

pub mod config;
pub mod error;
pub mod glob_path;
pub mod list;
pub mod matcher;
pub mod name;

pub use config::{ListConfig, NamesPathsConfig};
pub use error::{MatcherError, Result};
pub use glob_path::GlobPath;
pub use list::list_files;
pub use matcher::{All, Any, Matcher, Not};
pub use name::{Hidden, Name};
