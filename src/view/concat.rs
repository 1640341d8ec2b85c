use crate::keeper::{owned_keeper, Elem, Iter, Keeper};
use std::iter::FusedIterator;

/// View yielding all elements of `first`, then all elements of `second`.
#[derive(Debug, Clone)]
pub struct Concat<K1, K2> {
    first: K1,
    second: K2,
}

impl<K1, K2> Concat<K1, K2> {
    pub fn new(first: K1, second: K2) -> Self {
        Self { first, second }
    }
}

impl<K1, K2> IntoIterator for Concat<K1, K2>
where
    K1: Keeper,
    K2: Keeper,
    K2::Held: IntoIterator<Item = Elem<K1>>,
{
    type Item = Elem<K1>;
    type IntoIter = ConcatIter<Iter<K1>, Iter<K2>>;

    fn into_iter(self) -> Self::IntoIter {
        ConcatIter {
            first: Some(self.first.begin()),
            second: self.second.begin(),
        }
    }
}

owned_keeper! { [K1, K2] Concat<K1, K2> }

/// Iterator of [Concat].
#[derive(Debug, Clone)]
pub struct ConcatIter<A, B> {
    // None once exhausted, so `first` is never polled again
    first: Option<A>,
    second: B,
}

impl<A, B> Iterator for ConcatIter<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = &mut self.first {
            if let Some(item) = first.next() {
                return Some(item);
            }
            self.first = None;
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (second_lo, second_hi) = self.second.size_hint();
        match &self.first {
            Some(first) => {
                let (first_lo, first_hi) = first.size_hint();
                let hi = match (first_hi, second_hi) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (first_lo.saturating_add(second_lo), hi)
            }
            None => (second_lo, second_hi),
        }
    }
}

impl<A, B> DoubleEndedIterator for ConcatIter<A, B>
where
    A: DoubleEndedIterator,
    B: DoubleEndedIterator<Item = A::Item>,
{
    fn next_back(&mut self) -> Option<A::Item> {
        if let Some(item) = self.second.next_back() {
            return Some(item);
        }
        self.first.as_mut()?.next_back()
    }
}

impl<A, B> FusedIterator for ConcatIter<A, B>
where
    A: Iterator,
    B: FusedIterator<Item = A::Item>,
{
}
