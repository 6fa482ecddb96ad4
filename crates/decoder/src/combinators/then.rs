//! THEN and MAP combinators - transforming decoded values
//!
//! [`Then`] is the monadic bind: the value produced by one decoder picks the
//! decoder that runs next, against the same node and path. [`Map`] is the
//! plain functor map over the success value.

use crate::foundation::{Decode, Outcome, Path};
use serde_json::Value;
use std::marker::PhantomData;

// ============================================================================
// THEN COMBINATOR
// ============================================================================

/// Chains a decoder selected by a previously decoded value.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_decoder::prelude::*;
///
/// // The `kind` tag decides how `value` is read.
/// let shape = field("kind", string()).then(|kind| match kind.as_str() {
///     "circle" => field("radius", real()).map(|r| r * r * 3.0).boxed(),
///     "square" => field("side", real()).map(|s| s * s).boxed(),
///     other => fail(format!("unknown shape '{other}'")).boxed(),
/// });
///
/// assert_eq!(shape.decode_root(&json!({"kind": "square", "side": 2})), Ok(4.0));
/// assert!(shape.decode_root(&json!({"kind": "hexagon"})).is_err());
/// ```
pub struct Then<D, F, N> {
    first: D,
    next: F,
    _next: PhantomData<fn() -> N>,
}

impl<D, F, N> Then<D, F, N> {
    /// Creates a new `Then` combinator.
    pub fn new(first: D, next: F) -> Self {
        Self {
            first,
            next,
            _next: PhantomData,
        }
    }
}

impl<D, F, N> Decode for Then<D, F, N>
where
    D: Decode,
    F: Fn(D::Output) -> N,
    N: Decode,
{
    type Output = N::Output;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<N::Output> {
        let value = self.first.decode(path, node)?;
        (self.next)(value).decode(path, node)
    }
}

impl<D: Clone, F: Clone, N> Clone for Then<D, F, N> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.next.clone())
    }
}

impl<D: std::fmt::Debug, F, N> std::fmt::Debug for Then<D, F, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Then")
            .field("first", &self.first)
            .field("next", &"<function>")
            .finish()
    }
}

// ============================================================================
// MAP COMBINATOR
// ============================================================================

/// Transforms the value produced by a decoder.
pub struct Map<D, F, B> {
    inner: D,
    f: F,
    _result: PhantomData<fn() -> B>,
}

impl<D, F, B> Map<D, F, B> {
    /// Creates a new `Map` combinator.
    pub fn new(inner: D, f: F) -> Self {
        Self {
            inner,
            f,
            _result: PhantomData,
        }
    }

    /// Returns a reference to the inner decoder.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D, F, B> Decode for Map<D, F, B>
where
    D: Decode,
    F: Fn(D::Output) -> B,
{
    type Output = B;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<B> {
        self.inner.decode(path, node).map(&self.f)
    }
}

impl<D: Clone, F: Clone, B> Clone for Map<D, F, B> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.f.clone())
    }
}

impl<D: std::fmt::Debug, F, B> std::fmt::Debug for Map<D, F, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Creates a `Then` combinator.
pub fn then<D, F, N>(first: D, next: F) -> Then<D, F, N>
where
    D: Decode,
    F: Fn(D::Output) -> N,
    N: Decode,
{
    Then::new(first, next)
}

/// Creates a `Map` combinator.
pub fn map<D, F, B>(inner: D, f: F) -> Map<D, F, B>
where
    D: Decode,
    F: Fn(D::Output) -> B,
{
    Map::new(inner, f)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{fail, field, succeed};
    use crate::decoders::{int, string};
    use crate::foundation::{DecodeError, DecodeExt};
    use serde_json::json;

    #[test]
    fn test_then_runs_on_same_node() {
        let decoder = field("len", int()).then(|len| {
            field("items", crate::combinators::list(int())).then(move |items: Vec<i64>| {
                if items.len() as i64 == len {
                    succeed(items).boxed()
                } else {
                    fail("length mismatch").boxed()
                }
            })
        });

        assert_eq!(
            decoder.decode_root(&json!({"len": 2, "items": [1, 2]})),
            Ok(vec![1, 2])
        );
        assert_eq!(
            decoder.decode_root(&json!({"len": 3, "items": [1, 2]})),
            Err(DecodeError::custom(Path::root(), "length mismatch"))
        );
    }

    #[test]
    fn test_then_first_failure_short_circuits() {
        let decoder = then(field("tag", string()), |_tag| -> crate::combinators::Succeed<i64> {
            panic!("continuation must not run")
        });
        let err = decoder.decode_root(&json!({})).unwrap_err();
        assert_eq!(err, DecodeError::missing_field(Path::root(), "tag"));
    }

    #[test]
    fn test_map() {
        let decoder = map(field("name", string()), |s| s.to_uppercase());
        assert_eq!(decoder.decode_root(&json!({"name": "ace"})), Ok("ACE".to_string()));
    }

    #[test]
    fn test_map_preserves_failure() {
        let decoder = field("n", int()).map(|n| n + 1);
        let err = decoder.decode_root(&json!({"n": true})).unwrap_err();
        assert_eq!(err.path().to_string(), "n");
    }
}
