//! Combinators for building decoders from decoders
//!
//! | Combinator | Builds |
//! |------------|--------|
//! | [`ap`], [`call`] | applicative application of a decoded function |
//! | [`then`], [`map`] | dependent chaining, value transformation |
//! | [`map1`] … [`map8`], [`map_all`] | n-ary lifting |
//! | [`field`], [`optional_field`] | mapping entries |
//! | [`list`] | sequences |
//! | [`one_of`], [`or`] | alternation |
//! | [`nullable`], [`null`] | `null` handling |
//! | [`lazy`] | recursion |
//! | [`succeed`], [`fail`] | constants |
//!
//! Every combinator is a struct that owns its children plus a lower-case
//! factory function; the most common ones are also methods on
//! [`DecodeExt`](crate::foundation::DecodeExt).

pub mod apply;
pub mod constant;
pub mod field;
pub mod lazy;
pub mod list;
pub mod map_n;
pub mod nullable;
pub mod one_of;
pub mod then;

pub use apply::{Apply, Call, ap, call};
pub use constant::{Fail, Succeed, fail, succeed};
pub use field::{Field, OptionalField, field, optional_field};
pub use lazy::{Lazy, lazy};
pub use list::{List, list};
pub use map_n::{MapAll, MapN, map_all, map1, map2, map3, map4, map5, map6, map7, map8};
pub use nullable::{Null, Nullable, null, nullable};
pub use one_of::{OneOf, Or, one_of, or};
pub use then::{Map, Then, map, then};
