use crate::{
    error::{EzyError, EzyResult},
    keeper::{owned_keeper, Elem, Iter, Keeper},
};
use std::{iter::FusedIterator, mem};

/// View over the half-open index interval `from..until` of its source.
///
/// `until` past the end of the source is clamped to its length, and a `from`
/// past the end yields an empty view.
#[derive(Debug, Clone)]
pub struct Slice<K> {
    source: K,
    from: usize,
    until: usize,
}

impl<K> Slice<K> {
    /// Build the view, rejecting `from > until`.
    pub fn new(source: K, from: usize, until: usize) -> EzyResult<Self> {
        if from > until {
            return Err(EzyError::InvertedSlice { from, until });
        }
        Ok(Self {
            source,
            from,
            until,
        })
    }

    /// The `(from, until)` interval as requested, before clamping.
    pub fn bounds(&self) -> (usize, usize) {
        (self.from, self.until)
    }
}

impl<K> IntoIterator for Slice<K>
where
    K: Keeper,
{
    type Item = Elem<K>;
    type IntoIter = SliceIter<Iter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        SliceIter {
            inner: self.source.begin(),
            skip: self.from,
            remaining: self.until - self.from,
        }
    }
}

owned_keeper! { [K] Slice<K> }

/// Iterator of [Slice].
///
/// The leading elements are skipped on the first call to `next()`.
#[derive(Debug, Clone)]
pub struct SliceIter<I> {
    inner: I,
    skip: usize,
    remaining: usize,
}

impl<I> Iterator for SliceIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }

        let skip = mem::take(&mut self.skip);
        match self.inner.nth(skip) {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        let lo = lo.saturating_sub(self.skip).min(self.remaining);
        let hi = match hi {
            Some(hi) => hi.saturating_sub(self.skip).min(self.remaining),
            None => self.remaining,
        };
        (lo, Some(hi))
    }
}

impl<I> FusedIterator for SliceIter<I> where I: Iterator {}
