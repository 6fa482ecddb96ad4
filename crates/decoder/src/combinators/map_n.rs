//! MAPN combinators - lifting n-ary functions over decoders
//!
//! `map2` … `map8` run their decoders left to right against the same node,
//! stop at the first failure, and call the function once every value is in
//! hand. They are shorthand for a chain of [`ap`](crate::foundation::DecodeExt::ap)
//! calls over a curried closure, without the currying.
//!
//! [`map_all`] covers the homogeneous case where the number of decoders is
//! only known at runtime.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use strata_decoder::prelude::*;
//!
//! let pet = map2(
//!     |name: String, age: i64| json!({"name": name, "age": age}),
//!     field("name", string()),
//!     field("age", int()),
//! );
//!
//! let node = json!({"name": "ace", "age": 3});
//! assert_eq!(pet.decode_root(&node), Ok(node.clone()));
//! ```

use crate::foundation::{Decode, Outcome, Path};
use serde_json::Value;
use std::marker::PhantomData;

// ============================================================================
// MAPN COMBINATOR
// ============================================================================

/// Lifts a function over a tuple of decoders.
///
/// # Type Parameters
///
/// * `F` - The function, taking one argument per decoder
/// * `Ds` - A tuple of decoders
/// * `T` - The function's result
pub struct MapN<F, Ds, T> {
    f: F,
    decoders: Ds,
    _result: PhantomData<fn() -> T>,
}

impl<F, Ds, T> MapN<F, Ds, T> {
    /// Creates a new `MapN` combinator.
    pub fn new(f: F, decoders: Ds) -> Self {
        Self {
            f,
            decoders,
            _result: PhantomData,
        }
    }

    /// Returns the tuple of decoders.
    pub fn decoders(&self) -> &Ds {
        &self.decoders
    }
}

impl<F: Clone, Ds: Clone, T> Clone for MapN<F, Ds, T> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone(), self.decoders.clone())
    }
}

impl<F, Ds: std::fmt::Debug, T> std::fmt::Debug for MapN<F, Ds, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapN")
            .field("f", &"<function>")
            .field("decoders", &self.decoders)
            .finish()
    }
}

macro_rules! map_n {
    ($(#[$meta:meta])* $factory:ident; $($dec:ident $arg:ident $val:ident),+) => {
        impl<F, T, $($dec),+> Decode for MapN<F, ($($dec,)+), T>
        where
            $($dec: Decode,)+
            F: Fn($($dec::Output),+) -> T,
        {
            type Output = T;

            fn decode(&self, path: &Path, node: &Value) -> Outcome<T> {
                let ($($arg,)+) = &self.decoders;
                $(let $val = $arg.decode(path, node)?;)+
                Ok((self.f)($($val),+))
            }
        }

        $(#[$meta])*
        pub fn $factory<F, T, $($dec),+>(f: F, $($arg: $dec),+) -> MapN<F, ($($dec,)+), T>
        where
            $($dec: Decode,)+
            F: Fn($($dec::Output),+) -> T,
        {
            MapN::new(f, ($($arg,)+))
        }
    };
}

map_n!(
    /// Lifts a unary function; equivalent to [`map`](crate::combinators::map).
    map1; D1 d1 v1
);
map_n!(
    /// Lifts a binary function over two decoders.
    map2; D1 d1 v1, D2 d2 v2
);
map_n!(
    /// Lifts a 3-ary function over three decoders.
    map3; D1 d1 v1, D2 d2 v2, D3 d3 v3
);
map_n!(
    /// Lifts a 4-ary function over four decoders.
    map4; D1 d1 v1, D2 d2 v2, D3 d3 v3, D4 d4 v4
);
map_n!(
    /// Lifts a 5-ary function over five decoders.
    map5; D1 d1 v1, D2 d2 v2, D3 d3 v3, D4 d4 v4, D5 d5 v5
);
map_n!(
    /// Lifts a 6-ary function over six decoders.
    map6; D1 d1 v1, D2 d2 v2, D3 d3 v3, D4 d4 v4, D5 d5 v5, D6 d6 v6
);
map_n!(
    /// Lifts a 7-ary function over seven decoders.
    #[allow(clippy::too_many_arguments)]
    map7; D1 d1 v1, D2 d2 v2, D3 d3 v3, D4 d4 v4, D5 d5 v5, D6 d6 v6, D7 d7 v7
);
map_n!(
    /// Lifts an 8-ary function over eight decoders.
    #[allow(clippy::too_many_arguments)]
    map8; D1 d1 v1, D2 d2 v2, D3 d3 v3, D4 d4 v4, D5 d5 v5, D6 d6 v6, D7 d7 v7, D8 d8 v8
);

// ============================================================================
// MAP ALL COMBINATOR
// ============================================================================

/// Runs every decoder in order and passes the collected values to `f`.
#[derive(Clone)]
pub struct MapAll<F, D> {
    f: F,
    decoders: Vec<D>,
}

impl<F, D, T> Decode for MapAll<F, D>
where
    D: Decode,
    F: Fn(Vec<D::Output>) -> T,
{
    type Output = T;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<T> {
        let values = self
            .decoders
            .iter()
            .map(|decoder| decoder.decode(path, node))
            .collect::<Outcome<Vec<_>>>()?;
        Ok((self.f)(values))
    }
}

impl<F, D: std::fmt::Debug> std::fmt::Debug for MapAll<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapAll")
            .field("f", &"<function>")
            .field("decoders", &self.decoders)
            .finish()
    }
}

/// Creates a `MapAll` combinator over a runtime-sized list of decoders.
///
/// ```rust
/// use serde_json::json;
/// use strata_decoder::prelude::*;
///
/// let total = map_all(|parts: Vec<i64>| parts.iter().sum::<i64>(), vec![
///     field("a", int()),
///     field("b", int()),
///     field("c", int()),
/// ]);
///
/// assert_eq!(total.decode_root(&json!({"a": 1, "b": 2, "c": 3})), Ok(6));
/// ```
pub fn map_all<F, D, T>(f: F, decoders: Vec<D>) -> MapAll<F, D>
where
    D: Decode,
    F: Fn(Vec<D::Output>) -> T,
{
    MapAll { f, decoders }
}

// ============================================================================
// TESTS
// ============================================================================
