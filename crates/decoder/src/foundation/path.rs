//! Document paths for locating failures.
//!
//! A [`Path`] is the list of mapping keys and sequence indices walked from
//! the document root to the node currently being decoded. Paths are values:
//! extending one returns a new path and leaves the original untouched, so
//! sibling decodes never observe each other's segments.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One step from a parent node to a child node.
///
/// Serializes as a bare string or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A mapping key.
    Field(String),
    /// A sequence position.
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        Self::Field(name.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

// ============================================================================
// PATH
// ============================================================================

/// Location of a node inside a document, rendered as `server.ports[1]`.
///
/// # Examples
///
/// ```
/// use strata_decoder::foundation::Path;
///
/// let root = Path::root();
/// let port = root.field("server").field("ports").index(1);
///
/// assert_eq!(port.to_string(), "server.ports[1]");
/// assert!(root.is_root());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    segments: SmallVec<[PathSegment; 8]>,
}

impl Path {
    /// The empty path, pointing at the document root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended with a mapping key.
    #[must_use = "extending a path returns a new path"]
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.child(PathSegment::Field(name.into()))
    }

    /// Returns a new path extended with a sequence index.
    #[must_use = "extending a path returns a new path"]
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Returns a new path extended with `segment`.
    #[must_use = "extending a path returns a new path"]
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// The segments from the root down.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Alias for [`is_root`](Self::is_root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// The last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(Path::root().to_string(), "<root>");
    }

    #[test]
    fn test_nested_display() {
        let path = Path::root().field("a").field("b").index(2);
        assert_eq!(path.to_string(), "a.b[2]");
    }

    #[test]
    fn test_leading_index() {
        let path = Path::root().index(0).field("name");
        assert_eq!(path.to_string(), "[0].name");
    }

    #[test]
    fn test_extension_does_not_mutate() {
        let parent = Path::root().field("server");
        let host = parent.field("host");
        let port = parent.field("port");

        assert_eq!(parent.len(), 1);
        assert_eq!(host.to_string(), "server.host");
        assert_eq!(port.to_string(), "server.port");
    }

    #[test]
    fn test_from_iter() {
        let path: Path = ["age"].into_iter().collect();
        assert_eq!(path, Path::root().field("age"));
        assert_eq!(path.last(), Some(&PathSegment::Field("age".to_string())));
    }

    #[test]
    fn test_deep_path_spills_to_heap() {
        let path = (0..20).fold(Path::root(), |p, i| p.index(i));
        assert_eq!(path.len(), 20);
        assert!(path.to_string().ends_with("[19]"));
    }

    #[test]
    fn test_serde_form() {
        let path = Path::root().field("a").index(3);
        let encoded = serde_json::to_value(&path).unwrap();
        assert_eq!(encoded, serde_json::json!(["a", 3]));
        assert_eq!(serde_json::from_value::<Path>(encoded).unwrap(), path);
    }
}
