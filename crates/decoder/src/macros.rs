//! Macros for creating leaf decoders with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! primitive_decoder! {
//!     /// Decodes a boolean.
//!     pub Bool -> bool, expects NodeKind::Bool.name();
//!     extract(node) { node.as_bool() }
//!     fn boolean();
//! }
//! ```

// ============================================================================
// PRIMITIVE DECODER MACRO
// ============================================================================

/// Creates a complete leaf decoder: a unit struct, its `Decode`
/// implementation and a `const` factory function.
///
/// The `extract` block receives the node and returns `Some(value)` when the
/// node has the right kind. `None` becomes a `BadType` failure naming the
/// `expects` kind and echoing the node.
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied, so the decoders can live in `static`s.
macro_rules! primitive_decoder {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident -> $output:ty, expects $expected:expr;
        extract($node:ident) $extract:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Decode for $name {
            type Output = $output;

            fn decode(
                &self,
                path: &$crate::foundation::Path,
                $node: &serde_json::Value,
            ) -> $crate::foundation::Outcome<$output> {
                let extracted: Option<$output> = $extract;
                extracted.ok_or_else(|| {
                    $crate::foundation::DecodeError::bad_type(path.clone(), $expected, $node)
                })
            }
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] decoder.")]
        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

pub(crate) use primitive_decoder;
