use crate::keeper::{owned_keeper, Elem, Iter, Keeper};
use std::iter::FusedIterator;

/// View pairing up the elements of two ranges.
///
/// It stops as soon as either range is exhausted.
#[derive(Debug, Clone)]
pub struct Zip<K1, K2> {
    first: K1,
    second: K2,
}

impl<K1, K2> Zip<K1, K2> {
    pub fn new(first: K1, second: K2) -> Self {
        Self { first, second }
    }
}

impl<K1, K2> IntoIterator for Zip<K1, K2>
where
    K1: Keeper,
    K2: Keeper,
{
    type Item = (Elem<K1>, Elem<K2>);
    type IntoIter = ZipIter<Iter<K1>, Iter<K2>>;

    fn into_iter(self) -> Self::IntoIter {
        ZipIter {
            first: self.first.begin(),
            second: self.second.begin(),
        }
    }
}

owned_keeper! { [K1, K2] Zip<K1, K2> }

/// View combining the elements of two ranges with a zipper function.
#[derive(Clone)]
pub struct ZipWith<K1, K2, F> {
    first: K1,
    second: K2,
    zipper: F,
}

impl<K1, K2, F> ZipWith<K1, K2, F> {
    pub fn new(first: K1, second: K2, zipper: F) -> Self {
        Self {
            first,
            second,
            zipper,
        }
    }
}

impl<K1, K2, F, U> IntoIterator for ZipWith<K1, K2, F>
where
    K1: Keeper,
    K2: Keeper,
    F: FnMut(Elem<K1>, Elem<K2>) -> U,
{
    type Item = U;
    type IntoIter = ZipWithIter<Iter<K1>, Iter<K2>, F>;

    fn into_iter(self) -> Self::IntoIter {
        ZipWithIter {
            pairs: ZipIter {
                first: self.first.begin(),
                second: self.second.begin(),
            },
            zipper: self.zipper,
        }
    }
}

owned_keeper! { [K1, K2, F] ZipWith<K1, K2, F> }

/// Iterator of [Zip].
#[derive(Debug, Clone)]
pub struct ZipIter<A, B> {
    first: A,
    second: B,
}

impl<A, B> Iterator for ZipIter<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.first.size_hint();
        let (b_lo, b_hi) = self.second.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, hi) => hi,
        };
        (a_lo.min(b_lo), hi)
    }
}

impl<A, B> FusedIterator for ZipIter<A, B>
where
    A: FusedIterator,
    B: FusedIterator,
{
}

/// Iterator of [ZipWith].
#[derive(Clone)]
pub struct ZipWithIter<A, B, F> {
    pairs: ZipIter<A, B>,
    zipper: F,
}

impl<A, B, F, U> Iterator for ZipWithIter<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        let (a, b) = self.pairs.next()?;
        Some((self.zipper)(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}
