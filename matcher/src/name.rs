//! Matchers that test individual path components.

use std::path::Path;

use regex_lite::Regex;

use crate::error::{MatcherError, Result};
use crate::matcher::Matcher;

/// Matches a path if the name of the path or of any of its parents fully
/// matches one of the regular expressions.
///
/// `a/b/c.txt` is tested as `c.txt`, `b` and `a`. Expressions are anchored at
/// both ends, so `foo` matches the name `foo` but not `foobar`.
#[derive(Debug, Clone)]
pub struct Name {
    regexes: Vec<Regex>,
}

impl Name {
    /// Compile a name matcher from regular expressions.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regexes = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(&format!("^(?:{pattern})$")).map_err(|err| {
                    MatcherError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: err.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { regexes })
    }

    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }
}

impl Matcher for Name {
    fn matches(&self, rel_path: &Path) -> bool {
        rel_path.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            self.regexes.iter().any(|re| re.is_match(&name))
        })
    }
}

/// Matches paths where the path or any parent is a hidden entry: a name that
/// starts with `.` and has at least one more character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hidden;

impl Matcher for Hidden {
    fn matches(&self, rel_path: &Path) -> bool {
        rel_path.components().any(|component| {
            let name = component.as_os_str().as_encoded_bytes();
            name.len() > 1 && name[0] == b'.'
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_any_component() {
        let name = Name::new(["vendor", r".*\.pb\.go"]).unwrap();

        assert!(name.matches(Path::new("vendor")));
        assert!(name.matches(Path::new("vendor/lib/a.go")));
        assert!(name.matches(Path::new("pkg/vendor/b.go")));
        assert!(name.matches(Path::new("api/types.pb.go")));
        assert!(!name.matches(Path::new("pkg/main.go")));
    }

    #[test]
    fn test_name_is_anchored() {
        let name = Name::new(["foo"]).unwrap();

        assert!(name.matches(Path::new("foo")));
        assert!(!name.matches(Path::new("foobar")));
        assert!(!name.matches(Path::new("afoo/x")));
    }

    #[test]
    fn test_name_alternation_is_anchored() {
        let name = Name::new(["a|b"]).unwrap();

        assert!(name.matches(Path::new("a")));
        assert!(name.matches(Path::new("b")));
        assert!(!name.matches(Path::new("ab")));
    }

    #[test]
    fn test_empty_name_matches_nothing() {
        let name = Name::new(Vec::<String>::new()).unwrap();

        assert!(name.is_empty());
        assert!(!name.matches(Path::new("a.txt")));
    }

    #[test]
    fn test_invalid_regex() {
        let err = Name::new(["("]).unwrap_err();
        assert!(matches!(err, MatcherError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_hidden() {
        assert!(Hidden.matches(Path::new(".git")));
        assert!(Hidden.matches(Path::new(".git/config")));
        assert!(Hidden.matches(Path::new("src/.cache/x")));
        assert!(!Hidden.matches(Path::new(".")));
        assert!(!Hidden.matches(Path::new("src/main.rs")));
    }
}
