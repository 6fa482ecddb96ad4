//! NULL handling combinators
//!
//! - [`Nullable`] - substitutes a default for `null`, otherwise delegates
//! - [`Null`] - accepts only `null`
//!
//! `nullable` is an escape hatch for slots that may be left empty; `null` is
//! for slots where `null` is the one acceptable shape, typically as an
//! alternative inside [`one_of`](crate::combinators::one_of).

use crate::foundation::{Decode, DecodeError, NodeKind, Outcome, Path};
use serde_json::Value;

// ============================================================================
// NULLABLE COMBINATOR
// ============================================================================

/// Returns a default for `null` nodes and runs the inner decoder otherwise.
///
/// The inner decoder is never evaluated for `null`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_decoder::prelude::*;
///
/// let retries = field("retries", nullable(int(), 3));
/// assert_eq!(retries.decode_root(&json!({"retries": null})), Ok(3));
/// assert_eq!(retries.decode_root(&json!({"retries": 5})), Ok(5));
/// assert!(retries.decode_root(&json!({"retries": "five"})).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nullable<D, T> {
    inner: D,
    default: T,
}

impl<D, T> Nullable<D, T> {
    /// Creates a new `Nullable` combinator.
    pub fn new(inner: D, default: T) -> Self {
        Self { inner, default }
    }

    /// Returns a reference to the inner decoder.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D, T> Decode for Nullable<D, T>
where
    D: Decode<Output = T>,
    T: Clone,
{
    type Output = T;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<T> {
        if node.is_null() {
            Ok(self.default.clone())
        } else {
            self.inner.decode(path, node)
        }
    }
}

/// Creates a `Nullable` combinator.
pub fn nullable<D, T>(inner: D, default: T) -> Nullable<D, T>
where
    D: Decode<Output = T>,
    T: Clone,
{
    Nullable::new(inner, default)
}

// ============================================================================
// NULL DECODER
// ============================================================================

/// Succeeds with a fixed value when the node is `null`; any other node is a
/// `BadType("null")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Null<T> {
    value: T,
}

impl<T> Null<T> {
    /// Creates a new `Null` decoder yielding `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Decode for Null<T> {
    type Output = T;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<T> {
        match node {
            Value::Null => Ok(self.value.clone()),
            other => Err(DecodeError::bad_type(
                path.clone(),
                NodeKind::Null.name(),
                other,
            )),
        }
    }
}

/// Creates a `Null` decoder.
pub fn null<T: Clone>(value: T) -> Null<T> {
    Null::new(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::fail;
    use crate::decoders::string;
    use serde_json::json;

    #[test]
    fn test_nullable_null_skips_inner() {
        let decoder = nullable(fail::<i64>("inner must not run"), 0);
        assert_eq!(decoder.decode_root(&json!(null)), Ok(0));
    }

    #[test]
    fn test_nullable_delegates() {
        let decoder = nullable(string(), "n/a".to_string());
        assert_eq!(decoder.decode_root(&json!("x")), Ok("x".to_string()));
    }

    #[test]
    fn test_nullable_inner_failure_propagates() {
        let decoder = nullable(string(), String::new());
        let err = decoder.decode_root(&json!(1)).unwrap_err();
        assert_eq!(err, DecodeError::bad_type(Path::root(), "str", &json!(1)));
    }

    #[test]
    fn test_null_accepts_null() {
        assert_eq!(null(()).decode_root(&json!(null)), Ok(()));
        assert_eq!(null(None::<i64>).decode_root(&json!(null)), Ok(None));
    }

    #[test]
    fn test_null_rejects_other_kinds() {
        let err = null(0).decode_root(&json!(false)).unwrap_err();
        assert_eq!(err, DecodeError::bad_type(Path::root(), "null", &json!(false)));
    }
}
