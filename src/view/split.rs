use crate::{
    keeper::{owned_keeper, Iter, Keeper},
    view::{Delimiter, Subrange, Subranges},
};
use std::borrow::Borrow;

/// View splitting its source into the [Subrange]s separated by a delimiter.
///
/// Leading, trailing and repeated delimiters never produce empty pieces.
#[derive(Debug, Clone)]
pub struct Split<K, D> {
    source: K,
    delimiter: D,
}

impl<K, D> Split<K, D> {
    pub fn new(source: K, delimiter: D) -> Self {
        Self { source, delimiter }
    }

    pub fn delimiter(&self) -> &D {
        &self.delimiter
    }
}

/// Iterator of [Split].
pub type SplitIter<I, D> = Subranges<I, Delimiter<D>>;

/// Element of [Split].
pub type PieceOf<I, D> = Subrange<I, Delimiter<D>>;

impl<K, D> IntoIterator for Split<K, D>
where
    K: Keeper,
    <Iter<K> as Iterator>::Item: Borrow<D>,
    D: PartialEq,
{
    type Item = PieceOf<Iter<K>, D>;
    type IntoIter = SplitIter<Iter<K>, D>;

    fn into_iter(self) -> Self::IntoIter {
        Subranges::new(self.source.begin(), Delimiter(self.delimiter))
    }
}

owned_keeper! { [K, D] Split<K, D> }
