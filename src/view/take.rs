use crate::{
    error::{EzyError, EzyResult},
    keeper::{owned_keeper, Elem, Iter, Keeper},
};
use std::iter::FusedIterator;

/// View over at most the first `count` elements of its source.
#[derive(Debug, Clone)]
pub struct Take<K> {
    source: K,
    count: usize,
}

impl<K> Take<K> {
    pub fn new(source: K, count: usize) -> Self {
        Self { source, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<K> IntoIterator for Take<K>
where
    K: Keeper,
{
    type Item = Elem<K>;
    type IntoIter = TakeIter<Iter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        TakeIter {
            inner: self.source.begin(),
            remaining: self.count,
        }
    }
}

owned_keeper! { [K] Take<K> }

/// Iterator of [Take].
///
/// The source is never advanced past the last taken element, so taking from
/// an unbounded range terminates.
#[derive(Debug, Clone)]
pub struct TakeIter<I> {
    inner: I,
    remaining: usize,
}

impl<I> Iterator for TakeIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.inner.next();
        if item.is_none() {
            self.remaining = 0;
        }
        item
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if n >= self.remaining {
            if self.remaining > 0 {
                self.inner.nth(self.remaining - 1);
                self.remaining = 0;
            }
            return None;
        }
        self.remaining -= n + 1;
        self.inner.nth(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lo, hi) = self.inner.size_hint();
        let hi = match hi {
            Some(hi) => hi.min(self.remaining),
            None => self.remaining,
        };
        (lo.min(self.remaining), Some(hi))
    }
}

impl<I> ExactSizeIterator for TakeIter<I> where I: ExactSizeIterator {}

impl<I> FusedIterator for TakeIter<I> where I: Iterator {}

/// View over the leading elements of its source satisfying a predicate.
///
/// It ends at the first element failing the predicate.
#[derive(Clone)]
pub struct TakeWhile<K, P> {
    source: K,
    predicate: P,
}

impl<K, P> TakeWhile<K, P> {
    pub fn new(source: K, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<K, P> IntoIterator for TakeWhile<K, P>
where
    K: Keeper,
    P: FnMut(&Elem<K>) -> bool,
{
    type Item = Elem<K>;
    type IntoIter = TakeWhileIter<Iter<K>, P>;

    fn into_iter(self) -> Self::IntoIter {
        TakeWhileIter {
            inner: self.source.begin(),
            predicate: self.predicate,
            done: false,
        }
    }
}

owned_keeper! { [K, P] TakeWhile<K, P> }

/// Iterator of [TakeWhile].
#[derive(Clone)]
pub struct TakeWhileIter<I, P> {
    inner: I,
    predicate: P,
    done: bool,
}

impl<I, P> Iterator for TakeWhileIter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.inner.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhileIter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// View over all but the first `count` elements of its source.
///
/// Unlike the other views, the skipped elements are consumed as soon as the
/// view is turned into an iterator.
#[derive(Debug, Clone)]
pub struct Skip<K> {
    source: K,
    count: usize,
}

impl<K> Skip<K> {
    pub fn new(source: K, count: usize) -> Self {
        Self { source, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<K> IntoIterator for Skip<K>
where
    K: Keeper,
{
    type Item = Elem<K>;
    type IntoIter = Iter<K>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = self.source.begin();
        if self.count > 0 {
            log::trace!("skipping {} leading elements", self.count);
            iter.nth(self.count - 1);
        }
        iter
    }
}

owned_keeper! { [K] Skip<K> }

/// View over every `step`-th element of its source, starting with the first.
#[derive(Debug, Clone)]
pub struct StepBy<K> {
    source: K,
    step: usize,
}

impl<K> StepBy<K> {
    /// Build the view, rejecting a zero step.
    pub fn new(source: K, step: usize) -> EzyResult<Self> {
        if step == 0 {
            return Err(EzyError::ZeroStep);
        }
        Ok(Self { source, step })
    }

    pub fn step(&self) -> usize {
        self.step
    }
}

impl<K> IntoIterator for StepBy<K>
where
    K: Keeper,
{
    type Item = Elem<K>;
    type IntoIter = StepByIter<Iter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        StepByIter {
            inner: self.source.begin(),
            step: self.step,
            first: true,
        }
    }
}

owned_keeper! { [K] StepBy<K> }

/// Iterator of [StepBy].
#[derive(Debug, Clone)]
pub struct StepByIter<I> {
    inner: I,
    step: usize,
    first: bool,
}

impl<I> Iterator for StepByIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.first {
            self.first = false;
            self.inner.next()
        } else {
            self.inner.nth(self.step - 1)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        let count = |n: usize| {
            if self.first {
                n.div_ceil(self.step)
            } else {
                n / self.step
            }
        };
        (count(lo), hi.map(count))
    }
}
