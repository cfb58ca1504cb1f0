//! The `Matcher` capability and its boolean combinators.

use std::fmt;
use std::path::Path;

/// A predicate over a path relative to some base directory.
///
/// Paths use the platform's native separator. Any `Fn(&Path) -> bool` is a
/// matcher, so callers can plug in closures without defining a type.
pub trait Matcher {
    /// Returns whether `rel_path` matches.
    fn matches(&self, rel_path: &Path) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&Path) -> bool,
{
    fn matches(&self, rel_path: &Path) -> bool {
        self(rel_path)
    }
}

/// Matches if at least one of its matchers matches. An empty `Any` matches nothing.
#[derive(Default)]
pub struct Any {
    matchers: Vec<Box<dyn Matcher>>,
}

impl Any {
    /// Create a matcher from a list of boxed matchers.
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Add a matcher.
    pub fn with(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Matcher for Any {
    fn matches(&self, rel_path: &Path) -> bool {
        self.matchers.iter().any(|m| m.matches(rel_path))
    }
}

impl fmt::Debug for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Any")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

/// Matches if every one of its matchers matches. An empty `All` matches everything.
#[derive(Default)]
pub struct All {
    matchers: Vec<Box<dyn Matcher>>,
}

impl All {
    /// Create a matcher from a list of boxed matchers.
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Add a matcher.
    pub fn with(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }
}

impl Matcher for All {
    fn matches(&self, rel_path: &Path) -> bool {
        self.matchers.iter().all(|m| m.matches(rel_path))
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

/// Inverts another matcher.
pub struct Not<M> {
    inner: M,
}

impl<M: Matcher> Not<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Matcher> Matcher for Not<M> {
    fn matches(&self, rel_path: &Path) -> bool {
        !self.inner.matches(rel_path)
    }
}
