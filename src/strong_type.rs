use crate::feature::{Features, Strong};
use std::{fmt, fmt::Debug, marker::PhantomData};

/// Tag of the strong types returned by chained operations.
///
/// Unlike other tags, a value converts into a strong type with this tag
/// through [From].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extended;

/// Value of type `T` with the nominal identity `Tag` and the capabilities `F`.
///
/// The wrapper stores exactly one `T`. Its `Clone`, `Copy`, `Default`, `Send`
/// and `Sync` implementations follow those of `T` regardless of `Tag` and `F`.
/// Every other trait comes from the feature list, see [Features].
pub struct StrongType<T, Tag = (), F = ()> {
    value: T,
    _phantom: PhantomData<fn() -> (Tag, F)>,
}

impl<T, Tag, F> StrongType<T, Tag, F> {
    /// Wrap `value`.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get a reference to the underlying value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the underlying value.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Discard the wrapper and return the underlying value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Borrow the underlying value into an extended strong type with the same
    /// features, so that chained operations borrow instead of consuming `self`.
    pub fn iter(&self) -> StrongType<&T, Extended, F> {
        StrongType::new(&self.value)
    }

    /// Mutably borrow the underlying value into an extended strong type with
    /// the same features.
    pub fn iter_mut(&mut self) -> StrongType<&mut T, Extended, F> {
        StrongType::new(&mut self.value)
    }
}

impl<T, Tag, F> Strong for StrongType<T, Tag, F>
where
    F: Features,
{
    type Underlying = T;
    type Tag = Tag;
    type Features = F;
}

impl<T, F> From<T> for StrongType<T, Extended, F> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, Tag, F> Clone for StrongType<T, Tag, F>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T, Tag, F> Copy for StrongType<T, Tag, F> where T: Copy {}

impl<T, Tag, F> Default for StrongType<T, Tag, F>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, Tag, F> Debug for StrongType<T, Tag, F>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.value.fmt(f)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::StrongType;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, Tag, F> Serialize for StrongType<T, Tag, F>
    where
        T: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.get().serialize(serializer)
        }
    }

    impl<'de, T, Tag, F> Deserialize<'de> for StrongType<T, Tag, F>
    where
        T: Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            T::deserialize(deserializer).map(Self::new)
        }
    }
}
