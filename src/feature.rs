//! Capability lists of strong types.
//!
//! A feature list is a type implementing [Features]. It answers, for every
//! capability, whether it is granted with a type-level bit ([True] or
//! [False]). The operator and method implementations on
//! [StrongType](crate::StrongType) are gated on these bits.
//!
//! Primitive features grant exactly one capability. Tuples of features grant
//! the union of their members' capabilities, and nest:
//!
//! ```
//! use ezy::{feature::{Additive, Printable}, StrongType};
//!
//! struct Meters;
//! type Distance = StrongType<u32, Meters, (Additive, Printable)>;
//!
//! let d = Distance::new(3) + Distance::new(4) - Distance::new(2);
//! assert_eq!(d.to_string(), "5");
//! ```
//!
//! Queries and rebinding work on the [Strong] view of a strong type:
//!
//! ```
//! use ezy::{feature::{has_feature, Addable, Additive, Arithmetic, Orderable}, StrongType};
//!
//! type Money = StrongType<i64, (), Arithmetic>;
//! const _: () = assert!(has_feature::<Money, Addable>());
//! const _: () = assert!(has_feature::<Money, Additive>());
//! const _: () = assert!(!has_feature::<Money, Orderable>());
//! ```
//!
//! # Features defined outside this crate
//!
//! The list is open: [define_feature](crate::define_feature) declares a new
//! [Feature], and [Has] finds it anywhere in a (possibly nested) feature list.
//! The capability itself is a trait of your own, implemented for the strong
//! types whose list has the feature. `Has` carries an index parameter locating
//! the feature in the list. It is inferred, but the capability trait has to
//! take it as a parameter too, otherwise the impl leaves it unconstrained.
//!
//! ```
//! use ezy::{define_feature, feature::{Additive, Has}, StrongType};
//!
//! define_feature! {
//!     /// Grants `modulo`.
//!     pub Modulo
//! }
//!
//! pub trait Modular<Idx> {
//!     fn modulo(self, divisor: Self) -> Self;
//! }
//!
//! impl<T, Tag, F, Idx> Modular<Idx> for StrongType<T, Tag, F>
//! where
//!     T: std::ops::Rem<Output = T>,
//!     F: Has<Modulo, Idx>,
//! {
//!     fn modulo(self, divisor: Self) -> Self {
//!         Self::new(self.into_inner() % divisor.into_inner())
//!     }
//! }
//!
//! type Hours = StrongType<u32, (), (Additive, Modulo)>;
//!
//! let later = (Hours::new(22) + Hours::new(5)).modulo(Hours::new(24));
//! assert_eq!(later.into_inner(), 3);
//! ```
//!
//! Strong types lacking the feature do not get the capability:
//!
//! ```compile_fail
//! use ezy::{define_feature, feature::{Additive, Has}, StrongType};
//!
//! define_feature!(pub Modulo);
//!
//! pub trait Modular<Idx> {
//!     fn modulo(self, divisor: Self) -> Self;
//! }
//!
//! impl<T: std::ops::Rem<Output = T>, Tag, F: Has<Modulo, Idx>, Idx> Modular<Idx>
//!     for StrongType<T, Tag, F>
//! {
//!     fn modulo(self, divisor: Self) -> Self {
//!         Self::new(self.into_inner() % divisor.into_inner())
//!     }
//! }
//!
//! type Hours = StrongType<u32, (), Additive>;
//! let _ = Hours::new(22).modulo(Hours::new(24));
//! ```
//!
//! Operators of `std` cannot be granted this way, since the orphan rule keeps
//! downstream crates from implementing them for [StrongType]. A list naming the
//! same user feature twice makes the index ambiguous and the lookup fails to
//! compile; the built-in features tolerate repetition.

use crate::strong_type::StrongType;
use std::marker::PhantomData;

/// A type-level boolean.
pub trait Bit {
    const VALUE: bool;

    /// Disjunction with `B`.
    type Or<B: Bit>: Bit;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Bit for True {
    const VALUE: bool = true;
    type Or<B: Bit> = True;
}

impl Bit for False {
    const VALUE: bool = false;
    type Or<B: Bit> = B;
}

/// Capabilities granted by a feature list.
pub trait Features {
    /// `+` and `+=`.
    type CanAdd: Bit;
    /// `-` and `-=`.
    type CanSub: Bit;
    /// `*` and `*=`.
    type CanMul: Bit;
    /// `/` and `/=`.
    type CanDiv: Bit;
    /// Unary `-`.
    type CanNeg: Bit;
    /// `==` and `!=`.
    type CanCompare: Bit;
    /// `<`, `<=`, `>` and `>=`. Also needs [Features::CanCompare].
    type CanOrder: Bit;
    /// [Hash](std::hash::Hash).
    type CanHash: Bit;
    /// [Display](std::fmt::Display).
    type CanPrint: Bit;
    /// The [Iterable](crate::Iterable) trait and [IntoIterator].
    type CanIterate: Bit;
    /// `[]`.
    type CanIndex: Bit;
}

/// A single feature, as opposed to a list of them.
///
/// Built-in features set one capability bit of [Features]. Features declared
/// with [define_feature](crate::define_feature) set none and are looked up
/// with [Has] instead.
pub trait Feature: Features {}

/// Index of a feature that is the list itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Here;

/// Index of a feature found in the first element of a tuple, at `I` inside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Head<I>(PhantomData<I>);

/// Index of a feature found at `I` in the rest of a tuple.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tail<I>(PhantomData<I>);

/// A feature list containing the feature `X`, at position `Idx`.
///
/// `Idx` is a path of [Here], [Head] and [Tail] and is left to inference.
pub trait Has<X, Idx> {}

impl<X: Feature> Has<X, Here> for X {}

/// Strong types whose feature list has `X`.
///
/// ```
/// use ezy::feature::{Additive, Addable, Grants, Printable};
/// use ezy::StrongType;
///
/// fn granted<S: Grants<X, Idx>, X, Idx>() {}
///
/// granted::<StrongType<i32, (), (Printable, Additive)>, Addable, _>();
/// ```
pub trait Grants<X, Idx>: Strong {}

impl<S, X, Idx> Grants<X, Idx> for S
where
    S: Strong,
    S::Features: Has<X, Idx>,
{
}

// Expands to `True` if both capability names are equal, `False` otherwise.
macro_rules! bit {
    (CanAdd, CanAdd) => { True };
    (CanSub, CanSub) => { True };
    (CanMul, CanMul) => { True };
    (CanDiv, CanDiv) => { True };
    (CanNeg, CanNeg) => { True };
    (CanCompare, CanCompare) => { True };
    (CanOrder, CanOrder) => { True };
    (CanHash, CanHash) => { True };
    (CanPrint, CanPrint) => { True };
    (CanIterate, CanIterate) => { True };
    (CanIndex, CanIndex) => { True };
    ($granted:ident, $other:ident) => { False };
}

macro_rules! primitive_feature {
    ($($(#[$meta:meta])* $name:ident => $granted:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl Feature for $name {}

            impl Features for $name {
                type CanAdd = bit!($granted, CanAdd);
                type CanSub = bit!($granted, CanSub);
                type CanMul = bit!($granted, CanMul);
                type CanDiv = bit!($granted, CanDiv);
                type CanNeg = bit!($granted, CanNeg);
                type CanCompare = bit!($granted, CanCompare);
                type CanOrder = bit!($granted, CanOrder);
                type CanHash = bit!($granted, CanHash);
                type CanPrint = bit!($granted, CanPrint);
                type CanIterate = bit!($granted, CanIterate);
                type CanIndex = bit!($granted, CanIndex);
            }
        )*
    };
}

primitive_feature! {
    /// Grants [Add](std::ops::Add) and [AddAssign](std::ops::AddAssign).
    Addable => CanAdd;
    /// Grants [Sub](std::ops::Sub) and [SubAssign](std::ops::SubAssign).
    Subtractable => CanSub;
    /// Grants [Mul](std::ops::Mul) and [MulAssign](std::ops::MulAssign).
    Multipliable => CanMul;
    /// Grants [Div](std::ops::Div) and [DivAssign](std::ops::DivAssign).
    Dividable => CanDiv;
    /// Grants [Neg](std::ops::Neg).
    Negatable => CanNeg;
    /// Grants [PartialEq] and [Eq].
    EqualityComparable => CanCompare;
    /// Ordering capability. [PartialOrd] and [Ord] are only granted when the
    /// list also has [EqualityComparable], as [Comparable] does.
    Orderable => CanOrder;
    /// Grants [Hash](std::hash::Hash).
    Hashable => CanHash;
    /// Grants [Display](std::fmt::Display).
    Printable => CanPrint;
    /// Grants [IntoIterator] and the chained operations of [Iterable](crate::Iterable).
    Iterable => CanIterate;
    /// Grants [Index](std::ops::Index) and [IndexMut](std::ops::IndexMut).
    Indexable => CanIndex;
}

/// The empty feature list.
impl Features for () {
    type CanAdd = False;
    type CanSub = False;
    type CanMul = False;
    type CanDiv = False;
    type CanNeg = False;
    type CanCompare = False;
    type CanOrder = False;
    type CanHash = False;
    type CanPrint = False;
    type CanIterate = False;
    type CanIndex = False;
}

// A tuple grants what its head grants or what the tuple of its tail grants.
macro_rules! tuple_features {
    (@or $bit:ident, $head:ident $(, $tail:ident)*) => {
        <<$head as Features>::$bit as Bit>::Or<<($($tail,)*) as Features>::$bit>
    };
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> Features for ($head, $($tail,)*)
        where
            $head: Features,
            $($tail: Features,)*
        {
            type CanAdd = tuple_features!(@or CanAdd, $head $(, $tail)*);
            type CanSub = tuple_features!(@or CanSub, $head $(, $tail)*);
            type CanMul = tuple_features!(@or CanMul, $head $(, $tail)*);
            type CanDiv = tuple_features!(@or CanDiv, $head $(, $tail)*);
            type CanNeg = tuple_features!(@or CanNeg, $head $(, $tail)*);
            type CanCompare = tuple_features!(@or CanCompare, $head $(, $tail)*);
            type CanOrder = tuple_features!(@or CanOrder, $head $(, $tail)*);
            type CanHash = tuple_features!(@or CanHash, $head $(, $tail)*);
            type CanPrint = tuple_features!(@or CanPrint, $head $(, $tail)*);
            type CanIterate = tuple_features!(@or CanIterate, $head $(, $tail)*);
            type CanIndex = tuple_features!(@or CanIndex, $head $(, $tail)*);
        }

        tuple_features!($($tail),*);
    };
}

tuple_features!(F1, F2, F3, F4, F5, F6, F7, F8);

// A tuple has `X` if its head has it or the tuple of its tail has it.
macro_rules! tuple_has {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<X, I, $head $(, $tail)*> Has<X, Head<I>> for ($head, $($tail,)*)
        where
            $head: Has<X, I>,
        {
        }

        impl<X, I, $head $(, $tail)*> Has<X, Tail<I>> for ($head, $($tail,)*)
        where
            ($($tail,)*): Has<X, I>,
        {
        }

        tuple_has!($($tail),*);
    };
}

tuple_has!(F1, F2, F3, F4, F5, F6, F7, F8);

/// Declare a [Feature] that grants none of the built-in capabilities.
///
/// The new feature composes with the others in tuples, and is looked up with
/// [Has](crate::feature::Has).
///
/// ```
/// use ezy::{define_feature, feature::{Has, Printable}};
///
/// define_feature!(pub Audited);
///
/// fn audited<F: Has<Audited, Idx>, Idx>() {}
/// audited::<(Printable, (Audited,)), _>();
/// ```
#[macro_export]
macro_rules! define_feature {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::feature::Feature for $name {}

        impl $crate::feature::Features for $name {
            type CanAdd = $crate::feature::False;
            type CanSub = $crate::feature::False;
            type CanMul = $crate::feature::False;
            type CanDiv = $crate::feature::False;
            type CanNeg = $crate::feature::False;
            type CanCompare = $crate::feature::False;
            type CanOrder = $crate::feature::False;
            type CanHash = $crate::feature::False;
            type CanPrint = $crate::feature::False;
            type CanIterate = $crate::feature::False;
            type CanIndex = $crate::feature::False;
        }
    };
}

/// Additive group operations.
pub type Additive = (Addable, Subtractable);

pub type Multiplicative = (Multipliable, Dividable);

/// Every arithmetic operator.
pub type Arithmetic = (Additive, Multiplicative, Negatable);

/// Equality and ordering.
pub type Comparable = (EqualityComparable, Orderable);

/// Type-level description of a [StrongType].
pub trait Strong {
    type Underlying;
    type Tag;
    type Features: Features;
}

/// `S` with its feature list replaced by `F`.
pub type RebindFeatures<S, F> = StrongType<<S as Strong>::Underlying, <S as Strong>::Tag, F>;

/// `S` with its underlying type replaced by `T`.
pub type RebindStrongType<S, T> = StrongType<T, <S as Strong>::Tag, <S as Strong>::Features>;

/// `S` with the feature list of `O`.
pub type RebindFeaturesFromOther<S, O> =
    StrongType<<S as Strong>::Underlying, <S as Strong>::Tag, <O as Strong>::Features>;

/// `S` with its tag replaced by `Tag`.
pub type RebindTag<S, Tag> = StrongType<<S as Strong>::Underlying, Tag, <S as Strong>::Features>;

const fn implies<A, B>() -> bool
where
    A: Bit,
    B: Bit,
{
    !A::VALUE || B::VALUE
}

/// Whether the features of `S` include every capability of `X`.
///
/// `X` may be a primitive feature or a composed list. Only the built-in
/// capabilities are compared; use [Has] for features from
/// [define_feature](crate::define_feature).
pub const fn has_feature<S, X>() -> bool
where
    S: Strong,
    X: Features,
{
    implies::<X::CanAdd, <S::Features as Features>::CanAdd>()
        && implies::<X::CanSub, <S::Features as Features>::CanSub>()
        && implies::<X::CanMul, <S::Features as Features>::CanMul>()
        && implies::<X::CanDiv, <S::Features as Features>::CanDiv>()
        && implies::<X::CanNeg, <S::Features as Features>::CanNeg>()
        && implies::<X::CanCompare, <S::Features as Features>::CanCompare>()
        && implies::<X::CanOrder, <S::Features as Features>::CanOrder>()
        && implies::<X::CanHash, <S::Features as Features>::CanHash>()
        && implies::<X::CanPrint, <S::Features as Features>::CanPrint>()
        && implies::<X::CanIterate, <S::Features as Features>::CanIterate>()
        && implies::<X::CanIndex, <S::Features as Features>::CanIndex>()
}
