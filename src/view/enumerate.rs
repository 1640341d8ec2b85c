use crate::keeper::{owned_keeper, Elem, Iter, Keeper};
use std::iter::FusedIterator;

/// View pairing each element of its source with its zero-based position.
#[derive(Debug, Clone)]
pub struct Enumerate<K> {
    source: K,
}

impl<K> Enumerate<K> {
    pub fn new(source: K) -> Self {
        Self { source }
    }
}

impl<K> IntoIterator for Enumerate<K>
where
    K: Keeper,
{
    type Item = (usize, Elem<K>);
    type IntoIter = EnumerateIter<Iter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        EnumerateIter {
            inner: self.source.begin(),
            index: 0,
        }
    }
}

owned_keeper! { [K] Enumerate<K> }

/// Iterator of [Enumerate].
#[derive(Debug, Clone)]
pub struct EnumerateIter<I> {
    inner: I,
    index: usize,
}

impl<I> Iterator for EnumerateIter<I>
where
    I: Iterator,
{
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let item = self.inner.nth(n)?;
        let index = self.index + n;
        self.index = index + 1;
        Some((index, item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for EnumerateIter<I> where I: ExactSizeIterator {}

impl<I> FusedIterator for EnumerateIter<I> where I: FusedIterator {}
