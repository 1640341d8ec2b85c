//! Strong types with composable features, and lazy views over ranges that either
//! own or borrow their source.
//!
//! The crate has two halves that meet in the [Iterable] trait:
//!
//! - [StrongType<T, Tag, F>](StrongType) wraps a `T` under a nominal `Tag`, and
//!   grants operators and methods according to its feature list `F`.
//! - The view combinators ([filter], [map], [zip], [chunk], ...) build lazy
//!   ranges on top of other ranges. A view stores its source in a [Keeper],
//!   which owns the source when it is passed by value and borrows it when it
//!   is passed by reference.
//!
//! # Keepers
//!
//! Any range argument is turned into a keeper by [IntoKeeper]. The category of
//! the keeper is decided by how the argument is passed.
//!
//! | argument  | keeper                        | category               |
//! |-----------|-------------------------------|------------------------|
//! | `c`       | [Owned<C>](Owned)             | [Owner](marker::Owner) |
//! | `&c`      | [Borrowed<'_, C>](Borrowed)   | [Reference](marker::Reference) |
//! | `&mut c`  | [BorrowedMut<'_, C>](BorrowedMut) | [Reference](marker::Reference) |
//!
//! ```
//! use ezy::{make_keeper, marker::Ownership, Keeper};
//!
//! let values = vec![1, 2, 3];
//!
//! let borrowed = make_keeper(&values);
//! assert_eq!(borrowed.ownership(), Ownership::Reference);
//! assert_eq!(borrowed.ownership().to_string(), "reference");
//!
//! // copying is the only way from a reference to an owner
//! let copied = borrowed.copy();
//! assert_eq!(copied.ownership(), Ownership::Owner);
//!
//! let owned = make_keeper(values);
//! assert_eq!(owned.get(), &[1, 2, 3]);
//! ```
//!
//! # Views
//!
//! Views are lazy. Building one never touches an element, and each element is
//! computed when the view's iterator reaches it. A view over a borrowed
//! source therefore sees the current state of the source.
//!
//! ```
//! use std::cell::Cell;
//!
//! let cells = vec![Cell::new(1), Cell::new(2), Cell::new(3)];
//! let doubled = ezy::map(&cells, |cell| cell.get() * 2);
//!
//! cells[0].set(10);
//! let collected: Vec<i32> = doubled.clone().into_iter().collect();
//! assert_eq!(collected, [20, 4, 6]);
//! ```
//!
//! Views nest, since they are ranges themselves. Mutating elements through a
//! view over `&mut c` mutates `c`.
//!
//! ```
//! let mut values = vec![1, 2, 3, 4, 5, 6];
//! let evens = ezy::filter(&mut values, |x| **x % 2 == 0);
//! for x in ezy::take(evens, 2) {
//!     *x *= 10;
//! }
//! assert_eq!(values, [1, 20, 3, 40, 5, 6]);
//! ```
//!
//! The few runtime preconditions are reported with [EzyError].
//!
//! ```
//! use ezy::EzyError;
//!
//! let values = [1, 2, 3];
//! assert_eq!(
//!     ezy::slice(&values, 2, 1).unwrap_err(),
//!     EzyError::InvertedSlice { from: 2, until: 1 }
//! );
//!
//! let middle: Vec<_> = ezy::slice(&values, 1, 10).unwrap().into_iter().collect();
//! assert_eq!(middle, [&2, &3]);
//! ```
//!
//! Algorithms handing out positions into their argument only accept borrowed
//! ranges.
//!
//! ```compile_fail
//! let found = ezy::find_element(vec![1, 2, 3], &2);
//! ```
//!
//! # Strong types
//!
//! Two strong types over the same underlying type are unrelated unless their
//! tags agree.
//!
//! ```
//! use ezy::{feature::{Arithmetic, Comparable, Printable}, StrongType};
//!
//! struct Meters;
//! type Distance = StrongType<f64, Meters, (Arithmetic, Comparable, Printable)>;
//!
//! let total = Distance::new(1.5) + Distance::new(2.0);
//! assert!(total > Distance::new(3.0));
//! assert_eq!(format!("{total}"), "3.5");
//! assert_eq!(total.into_inner(), 3.5);
//! ```
//!
//! ```compile_fail
//! use ezy::{feature::Additive, StrongType};
//!
//! struct Meters;
//! struct Seconds;
//! type Distance = StrongType<f64, Meters, Additive>;
//! type Duration = StrongType<f64, Seconds, Additive>;
//!
//! let _ = Distance::new(1.0) + Duration::new(1.0);
//! ```
//!
//! With the [feature::Iterable] feature, the view combinators become chained
//! methods, see [Iterable].
//!
//! ```
//! use ezy::{feature, Iterable, StrongType};
//!
//! type Words = StrongType<Vec<&'static str>, (), feature::Iterable>;
//!
//! let words = Words::new(vec!["lazy", "strong", "views"]);
//! let lengths: Vec<usize> = words.iter().map(|word| word.len()).to();
//! assert_eq!(lengths, [4, 6, 5]);
//!
//! let shout = words.map(|word| word.to_uppercase()).join(" ");
//! assert_eq!(shout, "LAZY STRONG VIEWS");
//! ```

mod algorithm;
mod error;
pub mod feature;
mod features;
mod keeper;
pub mod marker;
mod strong_type;
pub mod view;

pub use algorithm::*;
pub use error::*;
pub use features::*;
pub use keeper::*;
pub use strong_type::*;
pub use view::*;

/// Traits needed to call keeper and chained methods.
pub mod prelude {
    pub use crate::{
        feature::{Features, Strong},
        IntoKeeper, Iterable, Keeper,
    };
}
