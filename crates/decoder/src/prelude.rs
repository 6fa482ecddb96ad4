//! Prelude module for convenient imports.
//!
//! Provides a single `use strata_decoder::prelude::*;` import that brings
//! in the traits, failure types, leaf decoders, combinators and document
//! entry points.
//!
//! # Examples
//!
//! ```rust
//! use strata_decoder::prelude::*;
//!
//! let name = field("name", string());
//! let tags = optional_field("tags", list(string()), Vec::new());
//! let port = one_of(vec![int().boxed(), string().map(|s| s.len() as i64).boxed()]);
//! # let _ = (name, tags, port);
//! ```

// ============================================================================
// FOUNDATION: Core traits, failures, paths
// ============================================================================

pub use crate::foundation::{
    BoxDecoder, Decode, DecodeError, DecodeExt, FailureKind, NodeKind, Outcome, Path, PathSegment,
    SharedDecoder,
};

// ============================================================================
// DECODERS: Built-in leaves
// ============================================================================

pub use crate::decoders::{
    AnyValue, Bool, Float, Int, Real, Str, any_value, boolean, float, int, real, string,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Apply, Call, Fail, Field, Lazy, List, Map, MapAll, MapN, Null, Nullable, OneOf, OptionalField,
    Or, Succeed, Then, ap, call, fail, field, lazy, list, map, map_all, map1, map2, map3, map4,
    map5, map6, map7, map8, null, nullable, one_of, optional_field, or, succeed, then,
};

// ============================================================================
// DOCUMENTS: Entry points
// ============================================================================

pub use crate::document::{
    DocumentError, DocumentFormat, decode_document, decode_file, decode_json, decode_json_reader,
    decode_value,
};

#[cfg(feature = "yaml")]
pub use crate::document::{decode_yaml, decode_yaml_reader};
