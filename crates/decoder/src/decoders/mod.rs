//! Built-in leaf decoders
//!
//! Leaves accept exactly one node kind and never coerce between kinds.
//! Everything structural (mappings, sequences, nulls) lives in
//! [`combinators`](crate::combinators).

pub mod scalar;

pub use scalar::{AnyValue, Bool, Float, Int, Real, Str, any_value, boolean, float, int, real, string};
