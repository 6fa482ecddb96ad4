//! Node classification.

use serde_json::Value;
use std::fmt;

/// The exact runtime kind of a document node.
///
/// Primitive decoders dispatch on this instead of coercing values, so an
/// integer never satisfies a string decoder and a float never satisfies an
/// integer decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `null` / `~`
    Null,
    /// `true` / `false`
    Bool,
    /// A number without a fractional part that fits `i64` or `u64`.
    Int,
    /// Any other number.
    Float,
    /// A string scalar.
    Str,
    /// A sequence.
    List,
    /// A string-keyed mapping.
    Map,
}

impl NodeKind {
    /// Classifies `node`.
    #[must_use]
    pub fn of(node: &Value) -> Self {
        match node {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Int,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::Str,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Map,
        }
    }

    /// Name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::List => "list",
            Self::Map => "map",
        }
    }

    /// Returns true for `Int` and `Float`.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification() {
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Null);
        assert_eq!(NodeKind::of(&json!(true)), NodeKind::Bool);
        assert_eq!(NodeKind::of(&json!(-3)), NodeKind::Int);
        assert_eq!(NodeKind::of(&json!(u64::MAX)), NodeKind::Int);
        assert_eq!(NodeKind::of(&json!(1.5)), NodeKind::Float);
        assert_eq!(NodeKind::of(&json!("x")), NodeKind::Str);
        assert_eq!(NodeKind::of(&json!([1])), NodeKind::List);
        assert_eq!(NodeKind::of(&json!({})), NodeKind::Map);
    }

    #[test]
    fn test_float_with_zero_fraction_is_float() {
        assert_eq!(NodeKind::of(&json!(2.0)), NodeKind::Float);
    }

    #[test]
    fn test_numbers() {
        assert!(NodeKind::Int.is_number());
        assert!(NodeKind::Float.is_number());
        assert!(!NodeKind::Str.is_number());
    }
}
