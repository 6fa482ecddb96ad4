//! # strata-decoder
//!
//! Composable decoders that turn parsed JSON or YAML documents into typed
//! Rust values, reporting the exact path of the first mismatch.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_decoder::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Pet {
//!     name: String,
//!     age: i64,
//! }
//!
//! let pet = map2(|name, age| Pet { name, age }, field("name", string()), field("age", int()));
//!
//! let ok = decode_json(r#"{"name": "ace", "age": 3}"#, &pet).unwrap();
//! assert_eq!(ok, Pet { name: "ace".into(), age: 3 });
//!
//! let err = decode_json(r#"{"name": "ace", "age": "3"}"#, &pet).unwrap_err();
//! assert_eq!(err.to_string(), "expected int but found '3' in path 'age'");
//! ```
//!
//! ## Building Decoders
//!
//! - **Leaves**: [`int`](decoders::int), [`string`](decoders::string),
//!   [`boolean`](decoders::boolean), [`float`](decoders::float),
//!   [`real`](decoders::real), [`any_value`](decoders::any_value)
//! - **Structure**: [`field`](combinators::field),
//!   [`optional_field`](combinators::optional_field), [`list`](combinators::list)
//! - **Choice**: [`one_of`](combinators::one_of), [`nullable`](combinators::nullable),
//!   [`null`](combinators::null)
//! - **Composition**: [`ap`](foundation::DecodeExt::ap), [`then`](foundation::DecodeExt::then),
//!   [`map2`](combinators::map2) and friends, [`lazy`](combinators::lazy) for recursion
//!
//! Implement [`Decode`](foundation::Decode) directly for anything the
//! combinators cannot express.
//!
//! ## Features
//!
//! - `yaml` (default): YAML entry points via `serde_yaml`.

// DecodeError carries the offending node; boxing it would add an allocation
// to every failing branch of a one_of.
#![allow(clippy::result_large_err)]
// Nested combinators (Apply<Apply<Succeed<..>, Field<Int>, ..>, ..>) produce
// deep types by construction.
#![allow(clippy::type_complexity)]

mod macros;

pub mod combinators;
pub mod decoders;
pub mod document;
pub mod foundation;
pub mod prelude;
