use crate::marker::*;
use std::{
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    fmt,
    fmt::Debug,
    ops::{Range, RangeInclusive},
};

/// Iterator obtained from the value held by keeper `K`.
pub type Iter<K> = <<K as Keeper>::Held as IntoIterator>::IntoIter;

/// Element yielded by the range held by keeper `K`.
pub type Elem<K> = <<K as Keeper>::Held as IntoIterator>::Item;

/// Keeper built from range argument `R`.
pub type KeeperOf<R> = <R as IntoKeeper>::Keeper;

/// Element yielded by range argument `R` once kept.
pub type ElemOf<R> = Elem<KeeperOf<R>>;

/// Storage of a view's source range, either owned or borrowed.
///
/// The category is part of the type: [Owned] is an [Owner], while [Borrowed]
/// and [BorrowedMut] are [Reference]s. A reference keeper never takes ownership
/// of its referent, and moving it only moves the reference.
pub trait Keeper: Sized {
    type Category: Category;

    /// The kept range.
    type Target: ?Sized;

    /// What the keeper hands out when consumed: `T`, `&T` or `&mut T`.
    type Held: IntoIterator;

    /// Get a reference to the kept range.
    fn get(&self) -> &Self::Target;

    /// Consume the keeper and return the held value.
    fn into_held(self) -> Self::Held;

    /// Runtime view of [Keeper::Category].
    fn ownership(&self) -> Ownership {
        <Self::Category as Category>::OWNERSHIP
    }

    /// Invoke `f` with the held value: moved out of an owner, by reference otherwise.
    fn apply<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self::Held) -> R,
    {
        f(self.into_held())
    }

    /// Start iterating the held range.
    fn begin(self) -> Iter<Self> {
        self.into_held().into_iter()
    }

    /// Copy the kept range into a new owner.
    ///
    /// This is the only way to turn a reference keeper into an owner.
    fn copy(&self) -> Owned<<Self::Target as ToOwned>::Owned>
    where
        Self::Target: ToOwned,
    {
        Owned::new(self.get().to_owned())
    }

    /// Borrow the kept range as a reference keeper.
    fn by_ref(&self) -> Borrowed<'_, Self::Target> {
        Borrowed::new(self.get())
    }
}

/// Keeper owning its range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Owned<T> {
    inner: T,
}

impl<T> Owned<T> {
    /// Take ownership of `inner`.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Discard the keeper and return the range.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Get a mutable reference to the range.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Borrow the range mutably as a reference keeper.
    pub fn by_mut(&mut self) -> BorrowedMut<'_, T> {
        BorrowedMut::new(&mut self.inner)
    }
}

impl<T> Keeper for Owned<T>
where
    T: IntoIterator,
{
    type Category = Owner;
    type Target = T;
    type Held = T;

    fn get(&self) -> &T {
        &self.inner
    }

    fn into_held(self) -> T {
        self.inner
    }
}

impl<'a, T> IntoIterator for &'a Owned<T>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = <&'a T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.inner).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Owned<T>
where
    &'a mut T: IntoIterator,
{
    type Item = <&'a mut T as IntoIterator>::Item;
    type IntoIter = <&'a mut T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&mut self.inner).into_iter()
    }
}

/// Keeper referring to a range through a shared reference.
pub struct Borrowed<'a, T>
where
    T: ?Sized,
{
    inner: &'a T,
}

impl<'a, T> Borrowed<'a, T>
where
    T: ?Sized,
{
    pub fn new(inner: &'a T) -> Self {
        Self { inner }
    }

    /// Return the reference, keeping its full lifetime.
    pub fn into_ref(self) -> &'a T {
        self.inner
    }
}

impl<'a, T> Keeper for Borrowed<'a, T>
where
    T: ?Sized,
    &'a T: IntoIterator,
{
    type Category = Reference;
    type Target = T;
    type Held = &'a T;

    fn get(&self) -> &T {
        self.inner
    }

    fn into_held(self) -> &'a T {
        self.inner
    }
}

impl<'a, T> Clone for Borrowed<'a, T>
where
    T: ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Borrowed<'a, T> where T: ?Sized {}

impl<'a, T> Debug for Borrowed<'a, T>
where
    T: ?Sized + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.inner.fmt(f)
    }
}

/// Keeper referring to a range through a mutable reference.
///
/// Mutating elements through a view built on this keeper mutates the source.
pub struct BorrowedMut<'a, T>
where
    T: ?Sized,
{
    inner: &'a mut T,
}

impl<'a, T> BorrowedMut<'a, T>
where
    T: ?Sized,
{
    pub fn new(inner: &'a mut T) -> Self {
        Self { inner }
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.inner
    }

    /// Give up mutable access, keeping the reference category.
    pub fn into_const(self) -> Borrowed<'a, T> {
        Borrowed::new(self.inner)
    }

    /// Borrow again for a shorter lifetime.
    pub fn reborrow(&mut self) -> BorrowedMut<'_, T> {
        BorrowedMut::new(self.inner)
    }
}

impl<'a, T> Keeper for BorrowedMut<'a, T>
where
    T: ?Sized,
    &'a mut T: IntoIterator,
{
    type Category = Reference;
    type Target = T;
    type Held = &'a mut T;

    fn get(&self) -> &T {
        self.inner
    }

    fn into_held(self) -> &'a mut T {
        self.inner
    }
}

impl<'a, T> Debug for BorrowedMut<'a, T>
where
    T: ?Sized + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.inner.fmt(f)
    }
}

/// Conversion of a range argument into a [Keeper].
///
/// Values become [Owned], `&T` becomes [Borrowed] and `&mut T` becomes
/// [BorrowedMut]. Keepers passed by value keep their category.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be kept by a view",
    label = "not a range",
    note = "pass a container by value to move it into the view, or borrow it with `&` or `&mut`"
)]
pub trait IntoKeeper {
    type Keeper: Keeper;

    fn into_keeper(self) -> Self::Keeper;
}

impl<'a, T> IntoKeeper for &'a T
where
    T: ?Sized,
    &'a T: IntoIterator,
{
    type Keeper = Borrowed<'a, T>;

    fn into_keeper(self) -> Self::Keeper {
        Borrowed::new(self)
    }
}

impl<'a, T> IntoKeeper for &'a mut T
where
    T: ?Sized,
    &'a mut T: IntoIterator,
{
    type Keeper = BorrowedMut<'a, T>;

    fn into_keeper(self) -> Self::Keeper {
        BorrowedMut::new(self)
    }
}

impl<T> IntoKeeper for Owned<T>
where
    T: IntoIterator,
{
    type Keeper = Self;

    fn into_keeper(self) -> Self {
        self
    }
}

impl<'a, T> IntoKeeper for Borrowed<'a, T>
where
    T: ?Sized,
    &'a T: IntoIterator,
{
    type Keeper = Self;

    fn into_keeper(self) -> Self {
        self
    }
}

impl<'a, T> IntoKeeper for BorrowedMut<'a, T>
where
    T: ?Sized,
    &'a mut T: IntoIterator,
{
    type Keeper = Self;

    fn into_keeper(self) -> Self {
        self
    }
}

/// Range arguments that refer to a range living elsewhere.
///
/// Algorithms returning positions or references into their argument require it.
#[diagnostic::on_unimplemented(
    message = "Range must be a reference! Cannot form an iterator to a temporary!",
    label = "temporary range",
    note = "borrow the range with `&` or `&mut` instead"
)]
pub trait ReferenceRange: IntoKeeper {}

impl<'a, T> ReferenceRange for &'a T
where
    T: ?Sized,
    &'a T: IntoIterator,
{
}

impl<'a, T> ReferenceRange for &'a mut T
where
    T: ?Sized,
    &'a mut T: IntoIterator,
{
}

impl<'a, T> ReferenceRange for Borrowed<'a, T>
where
    T: ?Sized,
    &'a T: IntoIterator,
{
}

impl<'a, T> ReferenceRange for BorrowedMut<'a, T>
where
    T: ?Sized,
    &'a mut T: IntoIterator,
{
}

/// Build the keeper for `range`.
pub fn make_keeper<R>(range: R) -> R::Keeper
where
    R: IntoKeeper,
{
    range.into_keeper()
}

/// Implement [IntoKeeper] as an [Owned] keeper for each listed type.
macro_rules! owned_keeper {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> $crate::keeper::IntoKeeper for $ty
            where
                $ty: IntoIterator,
            {
                type Keeper = $crate::keeper::Owned<Self>;

                fn into_keeper(self) -> Self::Keeper {
                    $crate::keeper::Owned::new(self)
                }
            }
        )*
    };
}
pub(crate) use owned_keeper;

owned_keeper! {
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
    [T, const N: usize] [T; N],
    [T] Option<T>,
    [A] Range<A>,
    [A] RangeInclusive<A>,
    [T] std::vec::IntoIter<T>,
    ['a, T] std::slice::Iter<'a, T>,
    ['a] std::str::Chars<'a>,
    ['a] std::str::Bytes<'a>,
}
