//! APPLY and CALL combinators - applicative composition
//!
//! [`Apply`] runs a decoder that yields a function and a decoder that yields
//! its argument, then applies one to the other. Chaining `ap` over a curried
//! closure builds records field by field. [`Call`] closes a chain whose final
//! stage yields a nullary function instead of a value.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use strata_decoder::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Pet {
//!     name: String,
//!     age: i64,
//! }
//!
//! let pet = succeed(|name: String| move |age: i64| Pet { name, age })
//!     .ap(field("name", string()))
//!     .ap(field("age", int()));
//!
//! assert_eq!(
//!     pet.decode_root(&json!({"name": "ace", "age": 3})),
//!     Ok(Pet { name: "ace".into(), age: 3 }),
//! );
//! ```

use crate::foundation::{Decode, Outcome, Path};
use serde_json::Value;
use std::marker::PhantomData;

// ============================================================================
// APPLY COMBINATOR
// ============================================================================

/// Applies a decoded function to a decoded argument.
///
/// Evaluation order is fixed: the function decoder runs first and its
/// failure is returned without evaluating the argument decoder. Only when
/// both succeed is the function invoked.
///
/// # Type Parameters
///
/// * `F` - Decoder producing a `FnOnce(A::Output) -> B`
/// * `A` - Decoder producing the argument
/// * `B` - The result type
pub struct Apply<F, A, B> {
    function: F,
    argument: A,
    _result: PhantomData<fn() -> B>,
}

impl<F, A, B> Apply<F, A, B> {
    /// Creates a new `Apply` combinator.
    pub fn new(function: F, argument: A) -> Self {
        Self {
            function,
            argument,
            _result: PhantomData,
        }
    }

    /// Extracts the function and argument decoders.
    pub fn into_parts(self) -> (F, A) {
        (self.function, self.argument)
    }
}

impl<F, A, B> Decode for Apply<F, A, B>
where
    F: Decode,
    A: Decode,
    F::Output: FnOnce(A::Output) -> B,
{
    type Output = B;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<B> {
        let function = self.function.decode(path, node)?;
        let argument = self.argument.decode(path, node)?;
        Ok(function(argument))
    }
}

// Clone impl - manual because B is only a marker
impl<F: Clone, A: Clone, B> Clone for Apply<F, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone(), self.argument.clone())
    }
}

impl<F: std::fmt::Debug, A: std::fmt::Debug, B> std::fmt::Debug for Apply<F, A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Apply")
            .field("function", &self.function)
            .field("argument", &self.argument)
            .finish()
    }
}

// ============================================================================
// CALL COMBINATOR
// ============================================================================

/// Applies a decoded function to a decoded argument, then calls the
/// resulting nullary function.
///
/// Failure ordering is identical to [`Apply`].
pub struct Call<F, A, G, B> {
    function: F,
    argument: A,
    _result: PhantomData<fn() -> (G, B)>,
}

impl<F, A, G, B> Call<F, A, G, B> {
    /// Creates a new `Call` combinator.
    pub fn new(function: F, argument: A) -> Self {
        Self {
            function,
            argument,
            _result: PhantomData,
        }
    }
}

impl<F, A, G, B> Decode for Call<F, A, G, B>
where
    F: Decode,
    A: Decode,
    F::Output: FnOnce(A::Output) -> G,
    G: FnOnce() -> B,
{
    type Output = B;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<B> {
        let function = self.function.decode(path, node)?;
        let argument = self.argument.decode(path, node)?;
        Ok(function(argument)())
    }
}

impl<F: Clone, A: Clone, G, B> Clone for Call<F, A, G, B> {
    fn clone(&self) -> Self {
        Self::new(self.function.clone(), self.argument.clone())
    }
}

impl<F: std::fmt::Debug, A: std::fmt::Debug, G, B> std::fmt::Debug for Call<F, A, G, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Call")
            .field("function", &self.function)
            .field("argument", &self.argument)
            .finish()
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Creates an `Apply` combinator.
pub fn ap<F, A, B>(function: F, argument: A) -> Apply<F, A, B>
where
    F: Decode,
    A: Decode,
    F::Output: FnOnce(A::Output) -> B,
{
    Apply::new(function, argument)
}

/// Creates a `Call` combinator.
pub fn call<F, A, G, B>(function: F, argument: A) -> Call<F, A, G, B>
where
    F: Decode,
    A: Decode,
    F::Output: FnOnce(A::Output) -> G,
    G: FnOnce() -> B,
{
    Call::new(function, argument)
}

// ============================================================================
// TESTS
// ============================================================================
