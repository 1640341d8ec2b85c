use crate::keeper::{owned_keeper, Elem, Iter, Keeper};
use std::iter::FusedIterator;

/// View yielding the elements of its source that satisfy a predicate.
///
/// Built with [Filter::rejecting], it yields the elements that fail it instead.
#[derive(Clone)]
pub struct Filter<K, P> {
    source: K,
    predicate: P,
    keep: bool,
}

impl<K, P> Filter<K, P> {
    pub fn new(source: K, predicate: P) -> Self {
        Self {
            source,
            predicate,
            keep: true,
        }
    }

    /// Build a view yielding the elements for which `predicate` is false.
    pub fn rejecting(source: K, predicate: P) -> Self {
        Self {
            source,
            predicate,
            keep: false,
        }
    }
}

impl<K, P> IntoIterator for Filter<K, P>
where
    K: Keeper,
    P: FnMut(&Elem<K>) -> bool,
{
    type Item = Elem<K>;
    type IntoIter = FilterIter<Iter<K>, P>;

    fn into_iter(self) -> Self::IntoIter {
        FilterIter {
            inner: self.source.begin(),
            predicate: self.predicate,
            keep: self.keep,
        }
    }
}

owned_keeper! { [K, P] Filter<K, P> }

/// Iterator of [Filter].
#[derive(Clone)]
pub struct FilterIter<I, P> {
    inner: I,
    predicate: P,
    keep: bool,
}

impl<I, P> Iterator for FilterIter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let keep = self.keep;
        let predicate = &mut self.predicate;
        self.inner.find(|item| predicate(item) == keep)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I, P> DoubleEndedIterator for FilterIter<I, P>
where
    I: DoubleEndedIterator,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let keep = self.keep;
        let predicate = &mut self.predicate;
        self.inner.rfind(|item| predicate(item) == keep)
    }
}

impl<I, P> FusedIterator for FilterIter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}
