use crate::keeper::{owned_keeper, Elem, Iter, Keeper};
use std::{fmt, iter::FusedIterator};

/// View joining a range of ranges into one range.
///
/// Inner ranges that are empty contribute nothing.
#[derive(Debug, Clone)]
pub struct Flatten<K> {
    source: K,
}

impl<K> Flatten<K> {
    pub fn new(source: K) -> Self {
        Self { source }
    }
}

impl<K> IntoIterator for Flatten<K>
where
    K: Keeper,
    Elem<K>: IntoIterator,
{
    type Item = <Elem<K> as IntoIterator>::Item;
    type IntoIter = FlattenIter<Iter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        FlattenIter {
            outer: self.source.begin(),
            inner: None,
        }
    }
}

owned_keeper! { [K] Flatten<K> }

/// Iterator of [Flatten].
pub struct FlattenIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    outer: I,
    inner: Option<<I::Item as IntoIterator>::IntoIter>,
}

impl<I> Iterator for FlattenIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            self.inner = Some(self.outer.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lo = self.inner.as_ref().map_or(0, |inner| inner.size_hint().0);
        (lo, None)
    }
}

impl<I> FusedIterator for FlattenIter<I>
where
    I: FusedIterator,
    I::Item: IntoIterator,
{
}

impl<I> Clone for FlattenIter<I>
where
    I: Iterator + Clone,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<I> fmt::Debug for FlattenIter<I>
where
    I: Iterator + fmt::Debug,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlattenIter")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}
