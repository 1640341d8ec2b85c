use crate::keeper::{owned_keeper, Elem, Iter, Keeper};
use std::iter::FusedIterator;

/// Iterators that can be walked from the back.
#[diagnostic::on_unimplemented(
    message = "Range iterator is not bidirectional",
    label = "`{Self}` cannot be walked backwards"
)]
pub trait Bidirectional: DoubleEndedIterator {}

impl<I> Bidirectional for I where I: DoubleEndedIterator {}

/// View yielding the elements of its source in reverse order.
#[derive(Debug, Clone)]
pub struct Reverse<K> {
    source: K,
}

impl<K> Reverse<K> {
    pub fn new(source: K) -> Self {
        Self { source }
    }
}

impl<K> IntoIterator for Reverse<K>
where
    K: Keeper,
    Iter<K>: Bidirectional,
{
    type Item = Elem<K>;
    type IntoIter = ReverseIter<Iter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        ReverseIter {
            inner: self.source.begin(),
        }
    }
}

owned_keeper! { [K] Reverse<K> }

/// Iterator of [Reverse].
#[derive(Debug, Clone)]
pub struct ReverseIter<I> {
    inner: I,
}

impl<I> Iterator for ReverseIter<I>
where
    I: Bidirectional,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.inner.next_back()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> DoubleEndedIterator for ReverseIter<I>
where
    I: Bidirectional,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

impl<I> ExactSizeIterator for ReverseIter<I> where I: Bidirectional + ExactSizeIterator {}

impl<I> FusedIterator for ReverseIter<I> where I: Bidirectional + FusedIterator {}
