//! Lazy views over ranges.
//!
//! Every view pairs a [Keeper](crate::Keeper) holding its source with the
//! parameters of the combinator. Building a view or calling `into_iter()` on it
//! never evaluates an element; elements are computed one at a time as the
//! returned iterator is advanced.
//!
//! Views are themselves ranges: they implement [IntoIterator] and can be passed
//! by value to any other combinator, which then owns them. A view is traversed
//! again by cloning it, which is cheap when its keepers are references.

mod chunk;
mod concat;
mod cycle;
mod enumerate;
mod filter;
mod flatten;
mod iota;
mod map;
mod reverse;
mod slice;
mod split;
mod subrange;
mod take;
mod zip;

pub use chunk::*;
pub use concat::*;
pub use cycle::*;
pub use enumerate::*;
pub use filter::*;
pub use flatten::*;
pub use iota::*;
pub use map::*;
pub use reverse::*;
pub use slice::*;
pub use split::*;
pub use subrange::*;
pub use take::*;
pub use zip::*;

pub(crate) use iota::progression_len;
