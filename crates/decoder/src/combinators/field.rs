//! FIELD combinators - decoding mapping entries
//!
//! [`Field`] requires a key to be present and decodes its value one path
//! segment deeper. [`OptionalField`] substitutes a default when the key is
//! absent but still rejects a present value of the wrong shape.

use crate::foundation::{Decode, DecodeError, NodeKind, Outcome, Path};
use serde_json::Value;

// ============================================================================
// FIELD COMBINATOR
// ============================================================================

/// Decodes a required entry of a mapping.
///
/// # Failures
///
/// - the node is not a mapping: `BadType("map")` at the mapping's path
/// - the key is absent: `MissingField` at the mapping's path
/// - the value fails: whatever the inner decoder reports, at `path.name`
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_decoder::prelude::*;
///
/// let host = field("server", field("host", string()));
///
/// assert_eq!(
///     host.decode_root(&json!({"server": {"host": "localhost"}})),
///     Ok("localhost".to_string()),
/// );
///
/// let err = host.decode_root(&json!({"server": {}})).unwrap_err();
/// assert_eq!(err.to_string(), "missing field 'host'");
/// assert_eq!(err.path().to_string(), "server");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<D> {
    name: String,
    inner: D,
}

impl<D> Field<D> {
    /// Creates a new field decoder.
    pub fn new(name: impl Into<String>, inner: D) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    /// Returns the field name.
    pub fn field_name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the inner decoder.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Extracts the name and inner decoder.
    pub fn into_parts(self) -> (String, D) {
        (self.name, self.inner)
    }
}

impl<D: Decode> Decode for Field<D> {
    type Output = D::Output;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<D::Output> {
        match lookup(&self.name, path, node)? {
            Some(value) => self.inner.decode(&path.field(self.name.as_str()), value),
            None => Err(DecodeError::missing_field(path.clone(), self.name.as_str())),
        }
    }
}

// ============================================================================
// OPTIONAL FIELD COMBINATOR
// ============================================================================

/// Decodes an entry of a mapping, falling back to a default when the key is
/// absent.
///
/// A key that is present with an unacceptable value still fails; only
/// absence selects the default. The default is cloned on every use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalField<D, T> {
    name: String,
    inner: D,
    default: T,
}

impl<D, T> OptionalField<D, T> {
    /// Creates a new optional field decoder.
    pub fn new(name: impl Into<String>, inner: D, default: T) -> Self {
        Self {
            name: name.into(),
            inner,
            default,
        }
    }

    /// Returns the field name.
    pub fn field_name(&self) -> &str {
        &self.name
    }

    /// Returns the default value.
    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<D, T> Decode for OptionalField<D, T>
where
    D: Decode<Output = T>,
    T: Clone,
{
    type Output = T;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<T> {
        match lookup(&self.name, path, node)? {
            Some(value) => self.inner.decode(&path.field(self.name.as_str()), value),
            None => Ok(self.default.clone()),
        }
    }
}

/// Looks `name` up in `node`, which must be a mapping.
fn lookup<'a>(name: &str, path: &Path, node: &'a Value) -> Outcome<Option<&'a Value>> {
    match node {
        Value::Object(map) => Ok(map.get(name)),
        other => Err(DecodeError::bad_type(
            path.clone(),
            NodeKind::Map.name(),
            other,
        )),
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Creates a required field decoder.
pub fn field<D: Decode>(name: impl Into<String>, inner: D) -> Field<D> {
    Field::new(name, inner)
}

/// Creates an optional field decoder with a default.
pub fn optional_field<D, T>(name: impl Into<String>, inner: D, default: T) -> OptionalField<D, T>
where
    D: Decode<Output = T>,
    T: Clone,
{
    OptionalField::new(name, inner, default)
}

// ============================================================================
// TESTS
// ============================================================================
