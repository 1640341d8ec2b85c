//! Trait implementations on [StrongType](crate::StrongType) granted by its
//! feature list.
//!
//! Each implementation only goes through the wrapper's accessors and
//! constructor, so it applies to every underlying type and tag.

mod arithmetic;
mod compare;
mod index;
mod iterable;
mod print;

pub use iterable::*;
