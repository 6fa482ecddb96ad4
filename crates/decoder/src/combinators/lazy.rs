//! LAZY combinator - deferred decoder construction

use crate::foundation::{Decode, Outcome, Path};
use serde_json::Value;

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Builds its decoder from a factory at evaluation time.
///
/// The factory runs on every evaluation and the result is dropped
/// afterwards; nothing is cached between calls. This is what lets a
/// decoder refer to itself: the recursive reference is only followed when
/// the document actually nests, so construction terminates.
///
/// A recursive decoder must have a base case that stops on finite input;
/// one that unconditionally recurses diverges like any unbounded recursion.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use strata_decoder::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Tree {
///     value: i64,
///     children: Vec<Tree>,
/// }
///
/// fn tree() -> BoxDecoder<Tree> {
///     map2(
///         |value, children| Tree { value, children },
///         field("value", int()),
///         optional_field("children", list(lazy(tree)), Vec::new()),
///     )
///     .boxed()
/// }
///
/// let node = json!({"value": 1, "children": [{"value": 2}]});
/// assert_eq!(
///     tree().decode_root(&node),
///     Ok(Tree { value: 1, children: vec![Tree { value: 2, children: vec![] }] }),
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<F, D> Lazy<F>
where
    F: Fn() -> D,
{
    /// Creates a new LAZY combinator.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Builds a fresh decoder from the factory.
    pub fn build(&self) -> D {
        (self.factory)()
    }
}

impl<F, D> Decode for Lazy<F>
where
    F: Fn() -> D,
    D: Decode,
{
    type Output = D::Output;

    fn decode(&self, path: &Path, node: &Value) -> Outcome<D::Output> {
        tracing::trace!(%path, "building lazy decoder");
        self.build().decode(path, node)
    }
}

// Manual Debug impl since F might not implement Debug
impl<F> std::fmt::Debug for Lazy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy")
            .field("factory", &"<function>")
            .finish()
    }
}

/// Creates a LAZY combinator.
pub fn lazy<F, D>(factory: F) -> Lazy<F>
where
    F: Fn() -> D,
    D: Decode,
{
    Lazy::new(factory)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{field, list, map2, nullable, optional_field, succeed};
    use crate::decoders::int;
    use crate::foundation::{BoxDecoder, DecodeExt};
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    enum Expr {
        Lit(i64),
        Add(Box<Expr>, Box<Expr>),
    }

    fn expr() -> BoxDecoder<Expr> {
        int()
            .map(Expr::Lit)
            .or(map2(
                |l, r| Expr::Add(Box::new(l), Box::new(r)),
                field("left", lazy(expr)),
                field("right", lazy(expr)),
            ))
            .boxed()
    }

    #[test]
    fn test_lazy_not_built_before_use() {
        let builds = Arc::new(AtomicUsize::new(0));
        let count = builds.clone();

        let _decoder = Lazy::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
            int()
        });

        assert_eq!(builds.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_lazy_rebuilt_on_every_decode() {
        let builds = Arc::new(AtomicUsize::new(0));
        let count = builds.clone();

        let decoder = lazy(move || {
            count.fetch_add(1, Ordering::SeqCst);
            int()
        });

        assert_eq!(decoder.decode_root(&json!(1)), Ok(1));
        assert_eq!(decoder.decode_root(&json!(2)), Ok(2));
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_recursive_expression() {
        let node = json!({"left": 1, "right": {"left": 2, "right": 3}});
        assert_eq!(
            expr().decode_root(&node),
            Ok(Expr::Add(
                Box::new(Expr::Lit(1)),
                Box::new(Expr::Add(Box::new(Expr::Lit(2)), Box::new(Expr::Lit(3))))
            ))
        );
    }

    #[test]
    fn test_recursive_linked_list_depth() {
        fn depth() -> BoxDecoder<usize> {
            optional_field("next", nullable(lazy(depth).map(|d| d + 1), 0), 0).boxed()
        }

        let node = json!({"next": {"next": {"next": null}}});
        assert_eq!(depth().decode_root(&node), Ok(2));
    }

    #[test]
    fn test_lazy_forest() {
        fn forest() -> BoxDecoder<usize> {
            list(lazy(forest))
                .map(|children| children.iter().sum::<usize>() + 1)
                .or(succeed(0))
                .boxed()
        }

        assert_eq!(forest().decode_root(&json!([[], [[]]])), Ok(4));
    }
}
