use std::marker::PhantomData;
use strum::{AsRefStr, Display};

/// Ownership category of a [Keeper](crate::Keeper).
pub trait Category {
    /// Runtime mirror of the category.
    const OWNERSHIP: Ownership;
}

impl Category for Owner {
    const OWNERSHIP: Ownership = Ownership::Owner;
}

impl Category for Reference {
    const OWNERSHIP: Ownership = Ownership::Reference;
}

/// The keeper owns its source range.
pub struct Owner {
    _phantom: PhantomData<()>,
}

/// The keeper refers to a range owned by someone else.
pub struct Reference {
    _phantom: PhantomData<()>,
}

/// Value-level counterpart of [Owner] and [Reference].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Ownership {
    Owner,
    Reference,
}
