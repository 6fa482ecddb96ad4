//! Core traits for the decoding system
//!
//! This module defines the [`Decode`] trait every decoder implements and the
//! [`DecodeExt`] extension trait that provides the fluent composition API.

use crate::foundation::{Outcome, Path};
use serde_json::Value;
use std::sync::Arc;

// ============================================================================
// CORE DECODER TRAIT
// ============================================================================

/// A rule for turning a document node into a typed value.
///
/// Decoders are immutable values: `decode` takes `&self`, receives the node
/// by shared reference and reports failure through the returned
/// [`Outcome`]. The same decoder may be evaluated any number of times, from
/// any number of threads, and identical inputs always produce equal outcomes.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use strata_decoder::foundation::{Decode, DecodeError, Outcome, Path};
///
/// /// Accepts only even integers.
/// struct Even;
///
/// impl Decode for Even {
///     type Output = i64;
///
///     fn decode(&self, path: &Path, node: &Value) -> Outcome<i64> {
///         match node.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(n),
///             _ => Err(DecodeError::bad_type(path.clone(), "even int", node)),
///         }
///     }
/// }
///
/// assert_eq!(Even.decode_root(&json!(4)), Ok(4));
/// assert!(Even.decode_root(&json!(3)).is_err());
/// ```
pub trait Decode {
    /// The type produced on success.
    type Output;

    /// Decodes `node`, located at `path` in the document.
    fn decode(&self, path: &Path, node: &Value) -> Outcome<Self::Output>;

    /// Decodes `node` as the document root.
    fn decode_root(&self, node: &Value) -> Outcome<Self::Output> {
        self.decode(&Path::root(), node)
    }
}

/// A type-erased decoder that can be stored and shared across threads.
pub type BoxDecoder<T> = Box<dyn Decode<Output = T> + Send + Sync>;

/// A type-erased decoder behind shared ownership.
pub type SharedDecoder<T> = Arc<dyn Decode<Output = T> + Send + Sync>;

impl<D: Decode + ?Sized> Decode for &D {
    type Output = D::Output;

    #[inline]
    fn decode(&self, path: &Path, node: &Value) -> Outcome<Self::Output> {
        (**self).decode(path, node)
    }
}

impl<D: Decode + ?Sized> Decode for Box<D> {
    type Output = D::Output;

    #[inline]
    fn decode(&self, path: &Path, node: &Value) -> Outcome<Self::Output> {
        (**self).decode(path, node)
    }
}

impl<D: Decode + ?Sized> Decode for Arc<D> {
    type Output = D::Output;

    #[inline]
    fn decode(&self, path: &Path, node: &Value) -> Outcome<Self::Output> {
        (**self).decode(path, node)
    }
}

// ============================================================================
// DECODER EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for decoders.
///
/// Automatically implemented for every [`Decode`] type.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strata_decoder::prelude::*;
///
/// let age = field("age", int()).map(|a| a * 12);
/// assert_eq!(age.decode_root(&json!({"age": 3})), Ok(36));
/// ```
pub trait DecodeExt: Decode + Sized {
    /// Applies the function produced by `self` to the value produced by
    /// `arg`.
    ///
    /// `self` runs first; if it fails, `arg` is never evaluated. Curried
    /// closures give partial application across a chain of `ap` calls.
    ///
    /// ```
    /// use serde_json::json;
    /// use strata_decoder::prelude::*;
    ///
    /// let pair = succeed(|a: i64| move |b: String| (a, b))
    ///     .ap(field("n", int()))
    ///     .ap(field("s", string()));
    ///
    /// assert_eq!(pair.decode_root(&json!({"n": 1, "s": "x"})), Ok((1, "x".to_string())));
    /// ```
    fn ap<A, B>(self, arg: A) -> Apply<Self, A, B>
    where
        A: Decode,
        Self::Output: FnOnce(A::Output) -> B,
    {
        Apply::new(self, arg)
    }

    /// Like [`ap`](Self::ap), then invokes the resulting nullary function.
    ///
    /// Terminates an `ap` chain whose last stage yields a thunk instead of
    /// a value.
    fn call<A, G, B>(self, arg: A) -> Call<Self, A, G, B>
    where
        A: Decode,
        Self::Output: FnOnce(A::Output) -> G,
        G: FnOnce() -> B,
    {
        Call::new(self, arg)
    }

    /// Chains a decoder chosen from the value produced by `self`.
    ///
    /// The chosen decoder runs against the same node and path. Use it only
    /// when the shape genuinely depends on a decoded value; `ap` and `mapN`
    /// cover independent fields.
    fn then<F, D>(self, f: F) -> Then<Self, F, D>
    where
        F: Fn(Self::Output) -> D,
        D: Decode,
    {
        Then::new(self, f)
    }

    /// Transforms the value produced by `self`.
    fn map<F, B>(self, f: F) -> Map<Self, F, B>
    where
        F: Fn(Self::Output) -> B,
    {
        Map::new(self, f)
    }

    /// Tries `self`, then `other` on the same node.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Decode<Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Erases the decoder type.
    fn boxed(self) -> BoxDecoder<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Erases the decoder type behind an `Arc`.
    fn shared(self) -> SharedDecoder<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<D: Decode> DecodeExt for D {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::apply::{Apply, Call};
pub use crate::combinators::one_of::Or;
pub use crate::combinators::then::{Map, Then};

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{DecodeError, FailureKind};
    use serde_json::json;

    struct Echo;

    impl Decode for Echo {
        type Output = Value;

        fn decode(&self, _path: &Path, node: &Value) -> Outcome<Value> {
            Ok(node.clone())
        }
    }

    struct AlwaysFails;

    impl Decode for AlwaysFails {
        type Output = Value;

        fn decode(&self, path: &Path, _node: &Value) -> Outcome<Value> {
            Err(DecodeError::custom(path.clone(), "always fails"))
        }
    }

    #[test]
    fn test_decode_root_uses_root_path() {
        let err = AlwaysFails.decode_root(&json!(1)).unwrap_err();
        assert!(err.path().is_root());
    }

    #[test]
    fn test_reference_and_box_delegate() {
        let node = json!({"a": 1});
        assert_eq!((&Echo).decode_root(&node), Ok(node.clone()));
        assert_eq!(Echo.boxed().decode_root(&node), Ok(node.clone()));
        assert_eq!(Echo.shared().decode_root(&node), Ok(node));
    }

    #[test]
    fn test_boxed_dyn_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let boxed: BoxDecoder<Value> = Echo.boxed();
        assert_send_sync(&boxed);
    }

    #[test]
    fn test_shared_decoder_paths_isolated_across_threads() {
        use crate::combinators::{field, one_of};
        use crate::decoders::int;

        let decoder: SharedDecoder<i64> = one_of(vec![
            field("a", field("x", int())).boxed(),
            field("b", field("y", int())).boxed(),
        ])
        .collecting()
        .shared();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let decoder = Arc::clone(&decoder);
                scope.spawn(move || {
                    let (node, expected) = if worker % 2 == 0 {
                        (json!({"a": {"x": "no"}}), "a.x")
                    } else {
                        (json!({"b": {"y": "no"}}), "b.y")
                    };
                    for _ in 0..1000 {
                        let err = decoder.decode_root(&node).unwrap_err();
                        let paths: Vec<String> = err
                            .attempts()
                            .iter()
                            .filter(|attempt| attempt.kind() == FailureKind::BadType)
                            .map(|attempt| attempt.path().to_string())
                            .collect();
                        assert_eq!(paths, [expected]);
                        assert!(err.path().is_root());
                    }
                });
            }
        });
    }
}
