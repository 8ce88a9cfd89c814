//! Dotted module path value type.

use serde::{Deserialize, Serialize};

/// An absolute or relative Python module path as an ordered sequence of
/// identifier segments (`package.subpackage.module`).
///
/// `ModulePath` is an immutable value: equality is segment-wise and
/// case-sensitive, and all operations return new paths. An unknown source
/// module is modeled as `Option<&ModulePath>` at the call sites, not as an
/// empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    /// Creates a path from pre-split segments.
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parses a dotted string (`"a.b.c"`) into a path.
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted.split('.').map(str::to_owned).collect(),
        }
    }

    /// Borrowed view of the segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// New path with `name` appended as a final segment.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_owned());
        Self { segments }
    }

    /// Length of the longest shared segment prefix with `other`,
    /// stopping at the first mismatch.
    #[must_use]
    pub fn common_prefix_len(&self, other: &Self) -> usize {
        self.segments
            .iter()
            .zip(&other.segments)
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl std::fmt::Display for ModulePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for ModulePath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

/// Whether a segment names a private module or attribute.
///
/// A segment is private when it starts with an underscore, except for
/// reserved dunder-shaped names (`__init__`, `__future__`, ...), which are
/// part of the language's public surface.
#[must_use]
pub fn is_private_segment(segment: &str) -> bool {
    segment.starts_with('_') && !(segment.starts_with("__") && segment.ends_with("__"))
}
