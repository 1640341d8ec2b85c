use crate::{
    algorithm,
    error::EzyResult,
    feature::{Features, True},
    keeper::{owned_keeper, ElemOf, IntoKeeper, Iter, Keeper, KeeperOf, Owned, ReferenceRange},
    strong_type::{Extended, StrongType},
    view::{
        Bidirectional, Chunk, Concat, Cycle, Enumerate, Filter, Flatten, Map, Reverse, Skip, Slice,
        Split, StepBy, Take, TakeWhile, Zip, ZipWith,
    },
};
use std::{borrow::Borrow, fmt::Display};

/// Strong type returned by the chained operations of [Iterable].
pub type Chain<V, F> = StrongType<V, Extended, F>;

/// Chained range operations on strong types with the iterable feature.
///
/// The trait is implemented for the strong type itself and for shared and
/// mutable references to it. Calling a method on a value moves the underlying
/// range into the resulting view; calling it on a reference borrows it, and
/// mutating elements through a view over `&mut` mutates the wrapped range.
///
/// Every view-building method returns a [Chain] carrying the same feature
/// list, so that calls can be chained further.
///
/// ```
/// use ezy::{feature, Iterable, StrongType};
///
/// type Numbers = StrongType<Vec<i32>, (), feature::Iterable>;
///
/// let mut numbers = Numbers::new(vec![1, 2, 3, 4, 5, 6]);
/// for x in (&mut numbers).filter(|x| **x % 2 == 0) {
///     *x *= 2;
/// }
/// assert_eq!(numbers.get(), &[1, 4, 3, 8, 5, 12]);
///
/// let text = numbers.iter().map(|x| x + 1).take(3).join(" ");
/// assert_eq!(text, "2 5 4");
/// ```
pub trait Iterable: Sized {
    /// The range the operations apply to: `T`, `&T` or `&mut T`.
    type Range: IntoKeeper;

    /// Feature list carried over to the returned strong types.
    type Features: Features;

    /// Unwrap the range.
    fn into_range(self) -> Self::Range;

    fn for_each<G>(self, f: G)
    where
        G: FnMut(ElemOf<Self::Range>),
    {
        algorithm::for_each(self.into_range(), f)
    }

    fn map<G, U>(self, transform: G) -> Chain<Map<KeeperOf<Self::Range>, G>, Self::Features>
    where
        G: FnMut(ElemOf<Self::Range>) -> U,
    {
        Chain::new(algorithm::map(self.into_range(), transform))
    }

    fn flat_map<G, U>(
        self,
        transform: G,
    ) -> Chain<Flatten<Owned<Map<KeeperOf<Self::Range>, G>>>, Self::Features>
    where
        G: FnMut(ElemOf<Self::Range>) -> U,
        U: IntoIterator,
    {
        Chain::new(algorithm::flat_map(self.into_range(), transform))
    }

    fn concatenate<R>(
        self,
        other: R,
    ) -> Chain<Concat<KeeperOf<Self::Range>, KeeperOf<R>>, Self::Features>
    where
        R: IntoKeeper,
        <KeeperOf<R> as Keeper>::Held: IntoIterator<Item = ElemOf<Self::Range>>,
    {
        Chain::new(algorithm::concatenate(self.into_range(), other))
    }

    fn filter<P>(self, predicate: P) -> Chain<Filter<KeeperOf<Self::Range>, P>, Self::Features>
    where
        P: FnMut(&ElemOf<Self::Range>) -> bool,
    {
        Chain::new(algorithm::filter(self.into_range(), predicate))
    }

    fn empty(self) -> bool {
        algorithm::empty(self.into_range())
    }

    fn size(self) -> usize {
        algorithm::size(self.into_range())
    }

    fn contains<V>(self, value: &V) -> bool
    where
        ElemOf<Self::Range>: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        algorithm::contains(self.into_range(), value)
    }

    fn accumulate<A, G>(self, init: A, op: G) -> A
    where
        G: FnMut(A, ElemOf<Self::Range>) -> A,
    {
        algorithm::accumulate(self.into_range(), init, op)
    }

    fn chunk(self, size: usize) -> EzyResult<Chain<Chunk<KeeperOf<Self::Range>>, Self::Features>> {
        algorithm::chunk(self.into_range(), size).map(Chain::new)
    }

    /// Split into the elements satisfying `predicate` and the rest.
    ///
    /// Only available on shared references, since both halves refer to the
    /// same range.
    #[allow(clippy::type_complexity)]
    fn partition<P>(
        self,
        predicate: P,
    ) -> (
        Chain<Filter<KeeperOf<Self::Range>, P>, Self::Features>,
        Chain<Filter<KeeperOf<Self::Range>, P>, Self::Features>,
    )
    where
        Self::Range: ReferenceRange,
        KeeperOf<Self::Range>: Clone,
        P: FnMut(&ElemOf<Self::Range>) -> bool + Clone,
    {
        let (matching, rest) = algorithm::partition(self.into_range(), predicate);
        (Chain::new(matching), Chain::new(rest))
    }

    fn slice(
        self,
        from: usize,
        until: usize,
    ) -> EzyResult<Chain<Slice<KeeperOf<Self::Range>>, Self::Features>> {
        algorithm::slice(self.into_range(), from, until).map(Chain::new)
    }

    fn all<P>(self, predicate: P) -> bool
    where
        P: FnMut(ElemOf<Self::Range>) -> bool,
    {
        algorithm::all(self.into_range(), predicate)
    }

    fn any<P>(self, predicate: P) -> bool
    where
        P: FnMut(ElemOf<Self::Range>) -> bool,
    {
        algorithm::any(self.into_range(), predicate)
    }

    fn none<P>(self, predicate: P) -> bool
    where
        P: FnMut(ElemOf<Self::Range>) -> bool,
    {
        algorithm::none(self.into_range(), predicate)
    }

    fn zip<R>(self, other: R) -> Chain<Zip<KeeperOf<Self::Range>, KeeperOf<R>>, Self::Features>
    where
        R: IntoKeeper,
    {
        Chain::new(algorithm::zip(self.into_range(), other))
    }

    fn zip_with<R, G, U>(
        self,
        other: R,
        zipper: G,
    ) -> Chain<ZipWith<KeeperOf<Self::Range>, KeeperOf<R>, G>, Self::Features>
    where
        R: IntoKeeper,
        G: FnMut(ElemOf<Self::Range>, ElemOf<R>) -> U,
    {
        Chain::new(algorithm::zip_with(self.into_range(), other, zipper))
    }

    fn flatten(self) -> Chain<Flatten<KeeperOf<Self::Range>>, Self::Features>
    where
        ElemOf<Self::Range>: IntoIterator,
    {
        Chain::new(algorithm::flatten(self.into_range()))
    }

    fn take(self, count: usize) -> Chain<Take<KeeperOf<Self::Range>>, Self::Features> {
        Chain::new(algorithm::take(self.into_range(), count))
    }

    fn take_while<P>(
        self,
        predicate: P,
    ) -> Chain<TakeWhile<KeeperOf<Self::Range>, P>, Self::Features>
    where
        P: FnMut(&ElemOf<Self::Range>) -> bool,
    {
        Chain::new(algorithm::take_while(self.into_range(), predicate))
    }

    fn drop(self, count: usize) -> Chain<Skip<KeeperOf<Self::Range>>, Self::Features> {
        Chain::new(algorithm::drop(self.into_range(), count))
    }

    fn step_by(
        self,
        step: usize,
    ) -> EzyResult<Chain<StepBy<KeeperOf<Self::Range>>, Self::Features>> {
        algorithm::step_by(self.into_range(), step).map(Chain::new)
    }

    fn reverse(self) -> Chain<Reverse<KeeperOf<Self::Range>>, Self::Features>
    where
        Iter<KeeperOf<Self::Range>>: Bidirectional,
    {
        Chain::new(algorithm::reverse(self.into_range()))
    }

    fn split<D>(self, delimiter: D) -> Chain<Split<KeeperOf<Self::Range>, D>, Self::Features>
    where
        ElemOf<Self::Range>: Borrow<D>,
        D: PartialEq,
    {
        Chain::new(algorithm::split(self.into_range(), delimiter))
    }

    fn enumerate(self) -> Chain<Enumerate<KeeperOf<Self::Range>>, Self::Features> {
        Chain::new(algorithm::enumerate(self.into_range()))
    }

    fn cycle(self) -> Chain<Cycle<KeeperOf<Self::Range>>, Self::Features>
    where
        Iter<KeeperOf<Self::Range>>: Clone,
    {
        Chain::new(algorithm::cycle(self.into_range()))
    }

    /// See [find](crate::find) for the representation of the result.
    fn find<V>(self, value: &V) -> Option<ElemOf<Self::Range>>
    where
        ElemOf<Self::Range>: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        algorithm::find(self.into_range(), value)
    }

    fn find_if<P>(self, predicate: P) -> Option<ElemOf<Self::Range>>
    where
        P: FnMut(&ElemOf<Self::Range>) -> bool,
    {
        algorithm::find_if(self.into_range(), predicate)
    }

    /// Materialize the range into `C`.
    fn to<C>(self) -> C
    where
        C: FromIterator<ElemOf<Self::Range>>,
    {
        algorithm::collect(self.into_range())
    }

    /// Materialize the range into `C` and wrap it with the same features.
    fn to_iterable<C>(self) -> Chain<C, Self::Features>
    where
        C: FromIterator<ElemOf<Self::Range>>,
    {
        Chain::new(self.to())
    }

    fn join(self, separator: &str) -> String
    where
        ElemOf<Self::Range>: Display,
    {
        algorithm::join(self.into_range(), separator)
    }
}

impl<T, Tag, F> Iterable for StrongType<T, Tag, F>
where
    T: IntoKeeper,
    F: Features<CanIterate = True>,
{
    type Range = T;
    type Features = F;

    fn into_range(self) -> T {
        self.into_inner()
    }
}

impl<'a, T, Tag, F> Iterable for &'a StrongType<T, Tag, F>
where
    &'a T: IntoKeeper,
    F: Features<CanIterate = True>,
{
    type Range = &'a T;
    type Features = F;

    fn into_range(self) -> &'a T {
        self.get()
    }
}

impl<'a, T, Tag, F> Iterable for &'a mut StrongType<T, Tag, F>
where
    &'a mut T: IntoKeeper,
    F: Features<CanIterate = True>,
{
    type Range = &'a mut T;
    type Features = F;

    fn into_range(self) -> &'a mut T {
        self.get_mut()
    }
}

impl<T, Tag, F> IntoIterator for StrongType<T, Tag, F>
where
    T: IntoIterator,
    F: Features<CanIterate = True>,
{
    type Item = T::Item;
    type IntoIter = T::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, T, Tag, F> IntoIterator for &'a StrongType<T, Tag, F>
where
    &'a T: IntoIterator,
    F: Features<CanIterate = True>,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = <&'a T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.get().into_iter()
    }
}

impl<'a, T, Tag, F> IntoIterator for &'a mut StrongType<T, Tag, F>
where
    &'a mut T: IntoIterator,
    F: Features<CanIterate = True>,
{
    type Item = <&'a mut T as IntoIterator>::Item;
    type IntoIter = <&'a mut T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.get_mut().into_iter()
    }
}

owned_keeper! { [T, Tag, F] StrongType<T, Tag, F> }
