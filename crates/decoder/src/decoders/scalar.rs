//! Scalar decoders
//!
//! Each decoder accepts exactly one node kind: `int` never reads a float or
//! a numeric string, `string` never stringifies a number. [`Real`] is the
//! one deliberate widening, accepting both number kinds.

use crate::foundation::NodeKind;
use crate::macros::primitive_decoder;
use serde_json::Value;

primitive_decoder! {
    /// Decodes an integer into `i64`.
    ///
    /// Integers beyond the `i64` range are rejected as `BadType("int")`.
    pub Int -> i64, expects NodeKind::Int.name();
    extract(node) { node.as_i64() }
    fn int();
}

primitive_decoder! {
    /// Decodes a string scalar.
    pub Str -> String, expects NodeKind::Str.name();
    extract(node) { node.as_str().map(str::to_owned) }
    fn string();
}

primitive_decoder! {
    /// Decodes a boolean.
    pub Bool -> bool, expects NodeKind::Bool.name();
    extract(node) { node.as_bool() }
    fn boolean();
}

primitive_decoder! {
    /// Decodes a number written with a fractional part or exponent.
    ///
    /// JSON integer literals too large for `u64` are stored as floats by
    /// the parser and are accepted here.
    pub Float -> f64, expects NodeKind::Float.name();
    extract(node) {
        match node {
            Value::Number(n) if n.is_f64() => n.as_f64(),
            _ => None,
        }
    }
    fn float();
}

primitive_decoder! {
    /// Decodes any number, integer or float, into `f64`.
    pub Real -> f64, expects "real";
    extract(node) { node.as_f64() }
    fn real();
}

primitive_decoder! {
    /// Passes the node through untouched.
    ///
    /// Useful for leaving part of a document to be interpreted by the caller.
    pub AnyValue -> Value, expects "any";
    extract(node) { Some(node.clone()) }
    fn any_value();
}

// ============================================================================
// TESTS
// ============================================================================
