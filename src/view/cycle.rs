use crate::keeper::{owned_keeper, Elem, Iter, Keeper};
use std::iter::FusedIterator;

/// View repeating its source endlessly.
///
/// Cycling an empty range yields nothing.
#[derive(Debug, Clone)]
pub struct Cycle<K> {
    source: K,
}

impl<K> Cycle<K> {
    pub fn new(source: K) -> Self {
        Self { source }
    }
}

impl<K> IntoIterator for Cycle<K>
where
    K: Keeper,
    Iter<K>: Clone,
{
    type Item = Elem<K>;
    type IntoIter = CycleIter<Iter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        let origin = self.source.begin();
        CycleIter {
            current: origin.clone(),
            origin,
        }
    }
}

owned_keeper! { [K] Cycle<K> }

/// Iterator of [Cycle].
#[derive(Debug, Clone)]
pub struct CycleIter<I> {
    origin: I,
    current: I,
}

impl<I> Iterator for CycleIter<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.current.next() {
            Some(item) => Some(item),
            None => {
                log::trace!("cycle wrapped around");
                self.current = self.origin.clone();
                self.current.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.origin.size_hint() {
            (0, Some(0)) => (0, Some(0)),
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}

/// Range yielding the same value endlessly.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

impl<T> Repeat<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> IntoIterator for Repeat<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = RepeatIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        RepeatIter { value: self.value }
    }
}

owned_keeper! { [T] Repeat<T> }

/// Iterator of [Repeat].
#[derive(Debug, Clone)]
pub struct RepeatIter<T> {
    value: T,
}

impl<T> Iterator for RepeatIter<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }

    #[inline]
    fn nth(&mut self, _n: usize) -> Option<T> {
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> DoubleEndedIterator for RepeatIter<T>
where
    T: Clone,
{
    fn next_back(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

impl<T> FusedIterator for RepeatIter<T> where T: Clone {}
