use crate::{
    feature::{Features, True},
    strong_type::StrongType,
};
use std::ops::{Index, IndexMut};

impl<T, Tag, F, I> Index<I> for StrongType<T, Tag, F>
where
    T: Index<I>,
    F: Features<CanIndex = True>,
{
    type Output = T::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.get()[index]
    }
}

impl<T, Tag, F, I> IndexMut<I> for StrongType<T, Tag, F>
where
    T: IndexMut<I>,
    F: Features<CanIndex = True>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.get_mut()[index]
    }
}
