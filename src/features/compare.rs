use crate::{
    feature::{Features, True},
    strong_type::StrongType,
};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

impl<T, Tag, F> PartialEq for StrongType<T, Tag, F>
where
    T: PartialEq,
    F: Features<CanCompare = True>,
{
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T, Tag, F> Eq for StrongType<T, Tag, F>
where
    T: Eq,
    F: Features<CanCompare = True>,
{
}

impl<T, Tag, F> PartialOrd for StrongType<T, Tag, F>
where
    T: PartialOrd,
    F: Features<CanCompare = True, CanOrder = True>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T, Tag, F> Ord for StrongType<T, Tag, F>
where
    T: Ord,
    F: Features<CanCompare = True, CanOrder = True>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<T, Tag, F> Hash for StrongType<T, Tag, F>
where
    T: Hash,
    F: Features<CanHash = True>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
