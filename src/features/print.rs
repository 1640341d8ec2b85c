use crate::{
    feature::{Features, True},
    strong_type::StrongType,
};
use std::fmt::{self, Display};

impl<T, Tag, F> Display for StrongType<T, Tag, F>
where
    T: Display,
    F: Features<CanPrint = True>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}
