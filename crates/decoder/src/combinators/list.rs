//! LIST combinator - decodes every element of a sequence

use crate::foundation::{Decode, DecodeError, NodeKind, Outcome, Path};
use serde_json::Value;

// ============================================================================
// LIST COMBINATOR
// ============================================================================

/// Decodes each element of a sequence with the same decoder.
///
/// Elements are decoded in order at `path[index]`; the first failing
/// element ends the decode and its failure is returned. On success the
/// values keep the sequence order.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_decoder::prelude::*;
///
/// let ports = field("ports", list(int()));
/// assert_eq!(ports.decode_root(&json!({"ports": [80, 443]})), Ok(vec![80, 443]));
///
/// let err = ports.decode_root(&json!({"ports": [80, "https"]})).unwrap_err();
/// assert_eq!(err.path().to_string(), "ports[1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct List<D> {
    inner: D,
}

impl<D> List<D> {
    /// Creates a new LIST combinator.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Returns a reference to the element decoder.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Extracts the element decoder.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Decode> Decode for List<D> {
    type Output = Vec<D::Output>;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<Self::Output> {
        let Value::Array(elements) = node else {
            return Err(DecodeError::bad_type(path.clone(), NodeKind::List.name(), node));
        };

        elements
            .iter()
            .enumerate()
            .map(|(index, element)| self.inner.decode(&path.index(index), element))
            .collect()
    }
}

/// Creates a LIST combinator.
pub fn list<D: Decode>(inner: D) -> List<D> {
    List::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
