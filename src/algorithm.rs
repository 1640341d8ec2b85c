//! Free functions building views and consuming ranges.
//!
//! Every function takes its range argument by value and turns it into a
//! [Keeper] with [IntoKeeper]: containers passed by value are moved into the
//! view, while `&c` and `&mut c` are borrowed.

use crate::{
    error::{EzyError, EzyResult},
    keeper::{ElemOf, IntoKeeper, Iter, Keeper, KeeperOf, Owned, ReferenceRange},
    view::{
        progression_len, Bidirectional, Chunk, Concat, Cycle, Enumerate, Filter, Flatten, Iota,
        Iterate, Map, Repeat, Reverse, Skip, Slice, Split, StepBy, Take, TakeWhile, Zip, ZipWith,
    },
};
use num_traits::{Num, ToPrimitive};
use std::{
    borrow::Borrow,
    fmt::Display,
};

// Views

/// Keep the elements satisfying `predicate`.
///
/// ```
/// let mut values = vec![1, 2, 3, 4, 5, 6];
/// for x in ezy::filter(&mut values, |x| **x % 2 == 0) {
///     *x *= 2;
/// }
/// assert_eq!(values, [1, 4, 3, 8, 5, 12]);
/// ```
pub fn filter<R, P>(range: R, predicate: P) -> Filter<KeeperOf<R>, P>
where
    R: IntoKeeper,
    P: FnMut(&ElemOf<R>) -> bool,
{
    Filter::new(range.into_keeper(), predicate)
}

/// Apply `transform` to every element.
pub fn map<R, F, U>(range: R, transform: F) -> Map<KeeperOf<R>, F>
where
    R: IntoKeeper,
    F: FnMut(ElemOf<R>) -> U,
{
    Map::new(range.into_keeper(), transform)
}

/// Alias of [map].
pub fn transform<R, F, U>(range: R, transform: F) -> Map<KeeperOf<R>, F>
where
    R: IntoKeeper,
    F: FnMut(ElemOf<R>) -> U,
{
    map(range, transform)
}

/// Map every element to a range and join the results.
pub fn flat_map<R, F, U>(range: R, transform: F) -> Flatten<Owned<Map<KeeperOf<R>, F>>>
where
    R: IntoKeeper,
    F: FnMut(ElemOf<R>) -> U,
    U: IntoIterator,
{
    Flatten::new(Owned::new(map(range, transform)))
}

/// Yield the elements of `first`, then those of `second`.
pub fn concatenate<R1, R2>(first: R1, second: R2) -> Concat<KeeperOf<R1>, KeeperOf<R2>>
where
    R1: IntoKeeper,
    R2: IntoKeeper,
    <KeeperOf<R2> as Keeper>::Held: IntoIterator<Item = ElemOf<R1>>,
{
    Concat::new(first.into_keeper(), second.into_keeper())
}

/// Pair up the elements of two ranges, stopping at the shorter one.
///
/// ```
/// let pairs: Vec<_> = ezy::zip([1, 2, 3], [4, 5]).into_iter().collect();
/// assert_eq!(pairs, [(1, 4), (2, 5)]);
/// ```
pub fn zip<R1, R2>(first: R1, second: R2) -> Zip<KeeperOf<R1>, KeeperOf<R2>>
where
    R1: IntoKeeper,
    R2: IntoKeeper,
{
    Zip::new(first.into_keeper(), second.into_keeper())
}

/// Combine the elements of two ranges with `zipper`, stopping at the shorter one.
pub fn zip_with<R1, R2, F, U>(
    first: R1,
    second: R2,
    zipper: F,
) -> ZipWith<KeeperOf<R1>, KeeperOf<R2>, F>
where
    R1: IntoKeeper,
    R2: IntoKeeper,
    F: FnMut(ElemOf<R1>, ElemOf<R2>) -> U,
{
    ZipWith::new(first.into_keeper(), second.into_keeper(), zipper)
}

/// View over the elements at positions `from..until`.
///
/// Fails with [EzyError::InvertedSlice] if `from > until`.
pub fn slice<R>(range: R, from: usize, until: usize) -> EzyResult<Slice<KeeperOf<R>>>
where
    R: IntoKeeper,
{
    Slice::new(range.into_keeper(), from, until)
}

/// View over the first `count` elements.
pub fn take<R>(range: R, count: usize) -> Take<KeeperOf<R>>
where
    R: IntoKeeper,
{
    Take::new(range.into_keeper(), count)
}

/// View over the leading elements satisfying `predicate`.
pub fn take_while<R, P>(range: R, predicate: P) -> TakeWhile<KeeperOf<R>, P>
where
    R: IntoKeeper,
    P: FnMut(&ElemOf<R>) -> bool,
{
    TakeWhile::new(range.into_keeper(), predicate)
}

/// View over all but the first `count` elements.
pub fn drop<R>(range: R, count: usize) -> Skip<KeeperOf<R>>
where
    R: IntoKeeper,
{
    Skip::new(range.into_keeper(), count)
}

/// View over every `step`-th element. Fails with [EzyError::ZeroStep] on a zero step.
pub fn step_by<R>(range: R, step: usize) -> EzyResult<StepBy<KeeperOf<R>>>
where
    R: IntoKeeper,
{
    StepBy::new(range.into_keeper(), step)
}

/// Join a range of ranges.
pub fn flatten<R>(range: R) -> Flatten<KeeperOf<R>>
where
    R: IntoKeeper,
    ElemOf<R>: IntoIterator,
{
    Flatten::new(range.into_keeper())
}

/// Repeat the range endlessly.
pub fn cycle<R>(range: R) -> Cycle<KeeperOf<R>>
where
    R: IntoKeeper,
    Iter<KeeperOf<R>>: Clone,
{
    Cycle::new(range.into_keeper())
}

/// Yield `value` endlessly.
pub fn repeat<T>(value: T) -> Repeat<T>
where
    T: Clone,
{
    Repeat::new(value)
}

/// Split the range into chunks of `size` elements.
///
/// ```
/// let chunks: Vec<Vec<i32>> = ezy::chunk(1..10, 4)
///     .unwrap()
///     .into_iter()
///     .map(|chunk| chunk.collect())
///     .collect();
/// assert_eq!(chunks, [vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9]]);
/// ```
pub fn chunk<R>(range: R, size: usize) -> EzyResult<Chunk<KeeperOf<R>>>
where
    R: IntoKeeper,
{
    Chunk::new(range.into_keeper(), size)
}

/// Split the range on `delimiter`, dropping empty pieces.
///
/// ```
/// let words: Vec<String> = ezy::split("   This  is    a   sentence.  ".chars(), ' ')
///     .into_iter()
///     .map(|word| word.collect())
///     .collect();
/// assert_eq!(words, ["This", "is", "a", "sentence."]);
/// ```
pub fn split<R, D>(range: R, delimiter: D) -> Split<KeeperOf<R>, D>
where
    R: IntoKeeper,
    ElemOf<R>: Borrow<D>,
    D: PartialEq,
{
    Split::new(range.into_keeper(), delimiter)
}

/// Walk the range backwards.
///
/// The range iterator must be double-ended, so unbounded generators are rejected:
///
/// ```compile_fail
/// let _ = ezy::reverse(ezy::iterate(1, |x| x * 2));
/// ```
pub fn reverse<R>(range: R) -> Reverse<KeeperOf<R>>
where
    R: IntoKeeper,
    Iter<KeeperOf<R>>: Bidirectional,
{
    Reverse::new(range.into_keeper())
}

/// Pair every element with its position.
pub fn enumerate<R>(range: R) -> Enumerate<KeeperOf<R>>
where
    R: IntoKeeper,
{
    Enumerate::new(range.into_keeper())
}

/// `0, 1, ..., until - 1`.
pub fn range<T>(until: T) -> Take<Owned<Iota<T>>>
where
    T: Clone + Num + PartialOrd + ToPrimitive,
{
    range_between(T::zero(), until)
}

/// `from, from + 1, ..., until - 1`.
pub fn range_between<T>(from: T, until: T) -> Take<Owned<Iota<T>>>
where
    T: Clone + Num + PartialOrd + ToPrimitive,
{
    bounded_progression(from, until, T::one())
}

/// `from, from + step, ...` up to `until`, excluded.
///
/// A negative step counts down. A step pointing away from `until` yields
/// nothing, and a zero step fails with [EzyError::ZeroStep].
///
/// ```
/// let odds: Vec<i32> = ezy::range_by(1, 10, 2).unwrap().into_iter().collect();
/// assert_eq!(odds, [1, 3, 5, 7, 9]);
///
/// let down: Vec<i32> = ezy::range_by(3, 0, -1).unwrap().into_iter().collect();
/// assert_eq!(down, [3, 2, 1]);
/// ```
pub fn range_by<T>(from: T, until: T, step: T) -> EzyResult<Take<Owned<Iota<T>>>>
where
    T: Clone + Num + PartialOrd + ToPrimitive,
{
    if step.is_zero() {
        return Err(EzyError::ZeroStep);
    }
    Ok(bounded_progression(from, until, step))
}

fn bounded_progression<T>(from: T, until: T, step: T) -> Take<Owned<Iota<T>>>
where
    T: Clone + Num + PartialOrd + ToPrimitive,
{
    let len = progression_len(&from, &until, &step);
    Take::new(Owned::new(Iota::new(from, step)), len)
}

/// `init, f(init), f(f(init)), ...`, endlessly.
pub fn iterate<T, F>(init: T, f: F) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Iterate::new(init, f)
}

// Queries

/// First element equal to `value`.
///
/// Searching `&mut c` gives a `&mut` into `c`, searching `&c` gives a shared
/// reference, and searching an owned range moves the element out of it.
///
/// ```
/// let mut values = vec![1, 2, 3];
/// if let Some(x) = ezy::find(&mut values, &2) {
///     *x = 20;
/// }
/// assert_eq!(values, [1, 20, 3]);
///
/// let owned: Option<String> = ezy::find(vec!["a".to_string(), "b".to_string()], "b");
/// assert_eq!(owned.as_deref(), Some("b"));
/// ```
pub fn find<R, V>(range: R, value: &V) -> Option<ElemOf<R>>
where
    R: IntoKeeper,
    ElemOf<R>: Borrow<V>,
    V: PartialEq + ?Sized,
{
    range
        .into_keeper()
        .begin()
        .find(|item| <ElemOf<R> as Borrow<V>>::borrow(item) == value)
}

/// First element satisfying `predicate`.
pub fn find_if<R, P>(range: R, mut predicate: P) -> Option<ElemOf<R>>
where
    R: IntoKeeper,
    P: FnMut(&ElemOf<R>) -> bool,
{
    range.into_keeper().begin().find(|item| predicate(item))
}

/// Position of and reference to the first element equal to `value`.
pub fn find_element<R, V>(range: R, value: &V) -> Option<(usize, ElemOf<R>)>
where
    R: ReferenceRange,
    ElemOf<R>: Borrow<V>,
    V: PartialEq + ?Sized,
{
    range
        .into_keeper()
        .begin()
        .enumerate()
        .find(|(_, item)| <ElemOf<R> as Borrow<V>>::borrow(item) == value)
}

/// Position of and reference to the first element satisfying `predicate`.
pub fn find_element_if<R, P>(range: R, mut predicate: P) -> Option<(usize, ElemOf<R>)>
where
    R: ReferenceRange,
    P: FnMut(&ElemOf<R>) -> bool,
{
    range
        .into_keeper()
        .begin()
        .enumerate()
        .find(|(_, item)| predicate(item))
}

/// Whether some element is equal to `value`.
pub fn contains<R, V>(range: R, value: &V) -> bool
where
    R: IntoKeeper,
    ElemOf<R>: Borrow<V>,
    V: PartialEq + ?Sized,
{
    find(range, value).is_some()
}

/// Fold the range from `init` with `op`.
pub fn accumulate<R, A, F>(range: R, init: A, op: F) -> A
where
    R: IntoKeeper,
    F: FnMut(A, ElemOf<R>) -> A,
{
    range.into_keeper().begin().fold(init, op)
}

/// Whether every element satisfies `predicate`. Evaluated immediately.
pub fn all<R, P>(range: R, predicate: P) -> bool
where
    R: IntoKeeper,
    P: FnMut(ElemOf<R>) -> bool,
{
    range.into_keeper().begin().all(predicate)
}

/// Whether some element satisfies `predicate`. Evaluated immediately.
pub fn any<R, P>(range: R, predicate: P) -> bool
where
    R: IntoKeeper,
    P: FnMut(ElemOf<R>) -> bool,
{
    range.into_keeper().begin().any(predicate)
}

/// Whether no element satisfies `predicate`. Evaluated immediately.
pub fn none<R, P>(range: R, predicate: P) -> bool
where
    R: IntoKeeper,
    P: FnMut(ElemOf<R>) -> bool,
{
    !any(range, predicate)
}

/// Number of elements, counted by walking the range.
pub fn size<R>(range: R) -> usize
where
    R: IntoKeeper,
{
    range.into_keeper().begin().count()
}

/// Whether the range yields nothing.
pub fn empty<R>(range: R) -> bool
where
    R: IntoKeeper,
{
    range.into_keeper().begin().next().is_none()
}

pub fn for_each<R, F>(range: R, f: F)
where
    R: IntoKeeper,
    F: FnMut(ElemOf<R>),
{
    range.into_keeper().begin().for_each(f)
}

/// Display every element, separated by `separator`.
///
/// ```
/// assert_eq!(ezy::join(&[1, 2, 3], ", "), "1, 2, 3");
/// ```
pub fn join<R>(range: R, separator: &str) -> String
where
    R: IntoKeeper,
    ElemOf<R>: Display,
{
    let mut out = String::new();
    for (index, item) in range.into_keeper().begin().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.to_string());
    }
    out
}

/// Materialize the range into `C`.
pub fn collect<C, R>(range: R) -> C
where
    R: IntoKeeper,
    C: FromIterator<ElemOf<R>>,
{
    range.into_keeper().begin().collect()
}

/// Element at `index`, or `None` past the end.
pub fn checked_index<R>(range: R, index: usize) -> Option<ElemOf<R>>
where
    R: IntoKeeper,
{
    range.into_keeper().begin().nth(index)
}

/// Split a borrowed range into the elements satisfying `predicate` and the rest.
///
/// ```
/// let values = vec![1, 2, 3, 4, 5];
/// let (even, odd) = ezy::partition(&values, |x| **x % 2 == 0);
/// assert_eq!(even.into_iter().copied().collect::<Vec<_>>(), [2, 4]);
/// assert_eq!(odd.into_iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
/// ```
pub fn partition<R, P>(range: R, predicate: P) -> (Filter<KeeperOf<R>, P>, Filter<KeeperOf<R>, P>)
where
    R: ReferenceRange,
    KeeperOf<R>: Clone,
    P: FnMut(&ElemOf<R>) -> bool + Clone,
{
    let keeper = range.into_keeper();
    (
        Filter::new(keeper.clone(), predicate.clone()),
        Filter::rejecting(keeper, predicate),
    )
}
