//! Core decoding types and traits
//!
//! This module contains the fundamental building blocks of the decoder
//! engine:
//!
//! - **Traits**: [`Decode`], [`DecodeExt`]
//! - **Failures**: [`Outcome`], [`DecodeError`], [`FailureKind`]
//! - **Locations**: [`Path`], [`PathSegment`]
//! - **Classification**: [`NodeKind`]
//!
//! # Architecture
//!
//! ## 1. Decoders are values
//!
//! A decoder is an immutable value implementing [`Decode`]. Combinators are
//! plain structs that own their child decoders, so a composite decoder is an
//! ordinary tree of structs built once and evaluated many times:
//!
//! ```rust
//! use strata_decoder::prelude::*;
//!
//! let point = map2(|x, y| (x, y), field("x", int()), field("y", int()));
//! ```
//!
//! ## 2. Failure is data
//!
//! No combinator panics or unwinds. Every failure is a [`DecodeError`]
//! variant carrying the [`Path`] where it happened; the first failure in
//! evaluation order wins and later branches are never run.
//!
//! ## 3. Paths are never shared
//!
//! Descending into a field or element creates a new [`Path`]. Two decodes
//! running side by side, even of the same decoder, cannot see each other's
//! segments.

pub mod error;
pub mod kind;
pub mod path;
pub mod traits;

pub use error::{DecodeError, FailureKind, Outcome};
pub use kind::NodeKind;
pub use path::{Path, PathSegment};
pub use traits::{BoxDecoder, Decode, DecodeExt, SharedDecoder};

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with the decoder core.
pub mod prelude {
    pub use super::{
        BoxDecoder, Decode, DecodeError, DecodeExt, FailureKind, NodeKind, Outcome, Path,
        PathSegment, SharedDecoder,
    };
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Decodes `node` at `path` with `decoder`.
///
/// Convenience for one-off evaluations where a method call reads poorly.
pub fn decode_at<D>(decoder: &D, path: &Path, node: &serde_json::Value) -> Outcome<D::Output>
where
    D: Decode + ?Sized,
{
    decoder.decode(path, node)
}

// ============================================================================
// TESTS
// ============================================================================
