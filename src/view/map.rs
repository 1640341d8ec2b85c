use crate::keeper::{owned_keeper, Elem, Iter, Keeper};
use std::iter::FusedIterator;

/// View applying a transform to each element of its source.
#[derive(Clone)]
pub struct Map<K, F> {
    source: K,
    transform: F,
}

impl<K, F> Map<K, F> {
    pub fn new(source: K, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<K, F, U> IntoIterator for Map<K, F>
where
    K: Keeper,
    F: FnMut(Elem<K>) -> U,
{
    type Item = U;
    type IntoIter = MapIter<Iter<K>, F>;

    fn into_iter(self) -> Self::IntoIter {
        MapIter {
            inner: self.source.begin(),
            transform: self.transform,
        }
    }
}

owned_keeper! { [K, F] Map<K, F> }

/// Iterator of [Map].
///
/// The transform runs once per yielded element. Elements skipped with
/// [Iterator::nth] are never transformed.
#[derive(Clone)]
pub struct MapIter<I, F> {
    inner: I,
    transform: F,
}

impl<I, F, U> Iterator for MapIter<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.inner.next().map(&mut self.transform)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<U> {
        self.inner.nth(n).map(&mut self.transform)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, F, U> DoubleEndedIterator for MapIter<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> U,
{
    #[inline]
    fn next_back(&mut self) -> Option<U> {
        self.inner.next_back().map(&mut self.transform)
    }
}

impl<I, F, U> ExactSizeIterator for MapIter<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> U,
{
}

impl<I, F, U> FusedIterator for MapIter<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> U,
{
}
