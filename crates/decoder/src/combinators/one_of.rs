//! ONE OF combinators - alternation
//!
//! This module provides [`OneOf`], which tries a list of decoders in order,
//! and [`Or`], its two-alternative form. Both return the first success.
//!
//! When every alternative fails the result is
//! [`NoAlternativeMatched`](crate::foundation::DecodeError::NoAlternativeMatched)
//! at the current path. By default the individual failures are dropped;
//! [`OneOf::collecting`] keeps them in the error's `attempts` for richer
//! diagnostics, at the cost of a longer message.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use strata_decoder::prelude::*;
//!
//! // A port given either as a number or as a numeric string.
//! let port = one_of(vec![
//!     int().boxed(),
//!     string().then(|s| match s.parse::<i64>() {
//!         Ok(n) => succeed(n).boxed(),
//!         Err(_) => fail("not a port").boxed(),
//!     }).boxed(),
//! ]);
//!
//! assert_eq!(port.decode_root(&json!(8080)), Ok(8080));
//! assert_eq!(port.decode_root(&json!("8080")), Ok(8080));
//! assert!(port.decode_root(&json!(true)).is_err());
//! ```

use crate::foundation::{Decode, DecodeError, Outcome, Path};
use serde_json::Value;

// ============================================================================
// ONE OF COMBINATOR
// ============================================================================

/// Tries decoders in order until one succeeds.
///
/// Every alternative sees the same node and the same path.
#[derive(Debug, Clone)]
pub struct OneOf<D> {
    alternatives: Vec<D>,
    collect_attempts: bool,
}

impl<D> OneOf<D> {
    /// Creates a new `OneOf` combinator that discards per-alternative failures.
    pub fn new(alternatives: Vec<D>) -> Self {
        Self {
            alternatives,
            collect_attempts: false,
        }
    }

    /// Records each alternative's failure in the resulting error.
    #[must_use = "builder methods must be chained or built"]
    pub fn collecting(mut self) -> Self {
        self.collect_attempts = true;
        self
    }

    /// Returns the alternatives.
    pub fn alternatives(&self) -> &[D] {
        &self.alternatives
    }

    /// Returns the number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true when there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl<D: Decode> Decode for OneOf<D> {
    type Output = D::Output;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<D::Output> {
        let mut attempts = Vec::new();

        for alternative in &self.alternatives {
            match alternative.decode(path, node) {
                Ok(value) => return Ok(value),
                Err(e) if self.collect_attempts => attempts.push(e),
                Err(_) => {}
            }
        }

        tracing::trace!(
            %path,
            alternatives = self.alternatives.len(),
            "one_of exhausted all alternatives"
        );
        Err(DecodeError::NoAlternativeMatched {
            path: path.clone(),
            attempts,
        })
    }
}

/// Creates a `OneOf` combinator.
pub fn one_of<D: Decode>(alternatives: Vec<D>) -> OneOf<D> {
    OneOf::new(alternatives)
}

// ============================================================================
// OR COMBINATOR
// ============================================================================

/// Tries the left decoder, then the right one.
///
/// Unlike [`OneOf`] the two sides may have different types, so no boxing is
/// needed. Failure semantics match a non-collecting `OneOf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left decoder.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right decoder.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right decoders.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Decode for Or<L, R>
where
    L: Decode,
    R: Decode<Output = L::Output>,
{
    type Output = L::Output;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<L::Output> {
        self.left
            .decode(path, node)
            .or_else(|_| self.right.decode(path, node))
            .map_err(|_| DecodeError::no_alternative(path.clone()))
    }
}

/// Creates an `Or` combinator from two decoders.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Decode,
    R: Decode<Output = L::Output>,
{
    Or::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================
