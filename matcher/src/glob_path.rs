//! Glob matching against a path and its parents.

use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::error::{MatcherError, Result};
use crate::matcher::Matcher;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Matches a path if the path itself or any of its parent paths matches one
/// of the glob patterns.
///
/// `a/b/c.txt` is tested as `a/b/c.txt`, `a/b` and `a`, so the pattern `a/b`
/// matches everything below that directory. `*` does not cross separators.
#[derive(Debug, Clone)]
pub struct GlobPath {
    patterns: Vec<Pattern>,
}

impl GlobPath {
    /// Compile a path matcher from glob patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Pattern::new(pattern).map_err(|err| MatcherError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: err.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Matcher for GlobPath {
    fn matches(&self, rel_path: &Path) -> bool {
        rel_path
            .ancestors()
            .filter(|subpath| !subpath.as_os_str().is_empty())
            .any(|subpath| {
                self.patterns
                    .iter()
                    .any(|pattern| pattern.matches_path_with(subpath, MATCH_OPTIONS))
            })
    }
}
