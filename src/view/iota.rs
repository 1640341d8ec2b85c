use crate::keeper::owned_keeper;
use num_traits::{Num, ToPrimitive};
use std::{iter::FusedIterator, ops::Add};

/// Unbounded arithmetic progression `from, from + step, from + 2 * step, ...`.
///
/// Use [range_by](crate::range_by) and friends for a bounded one.
#[derive(Debug, Clone)]
pub struct Iota<T> {
    from: T,
    step: T,
}

impl<T> Iota<T> {
    pub fn new(from: T, step: T) -> Self {
        Self { from, step }
    }
}

impl<T> IntoIterator for Iota<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;
    type IntoIter = IotaIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IotaIter {
            current: self.from,
            step: self.step,
            started: false,
        }
    }
}

owned_keeper! { [T] Iota<T> }

/// Iterator of [Iota].
///
/// The step is added when the next value is requested, never ahead of time, so
/// a bounded progression ending at the largest value of `T` does not overflow.
#[derive(Debug, Clone)]
pub struct IotaIter<T> {
    current: T,
    step: T,
    started: bool,
}

impl<T> Iterator for IotaIter<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.started {
            self.current = self.current.clone() + self.step.clone();
        }
        self.started = true;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for IotaIter<T> where T: Clone + Add<Output = T> {}

/// Number of elements of the progression from `from` towards `until` (excluded)
/// by `step`, that is `ceil((until - from) / step)`.
///
/// A step pointing away from `until` gives an empty progression. `step` must
/// be non-zero. The distance is measured in `i128`/`u128` for integers and in
/// `f64` otherwise, so it never overflows `T`.
pub(crate) fn progression_len<T>(from: &T, until: &T, step: &T) -> usize
where
    T: Clone + Num + PartialOrd + ToPrimitive,
{
    debug_assert!(!step.is_zero());

    let len = if is_integral::<T>() {
        integral_len(from, until, step)
    } else {
        fractional_len(from, until, step)
    };

    log::debug!("arithmetic progression of {len} elements");
    len
}

// integer division truncates one half to zero
fn is_integral<T>() -> bool
where
    T: Num,
{
    (T::one() / (T::one() + T::one())).is_zero()
}

fn integral_len<T>(from: &T, until: &T, step: &T) -> usize
where
    T: Clone + Num + PartialOrd + ToPrimitive,
{
    let count = match (from.to_i128(), until.to_i128(), step.to_i128()) {
        (Some(from), Some(until), Some(step)) => {
            let ahead = if step > 0 { until > from } else { until < from };
            if !ahead {
                return 0;
            }
            until.abs_diff(from).div_ceil(step.unsigned_abs())
        }
        _ => match (from.to_u128(), until.to_u128(), step.to_u128()) {
            (Some(from), Some(until), Some(step)) => until.saturating_sub(from).div_ceil(step),
            _ => return generic_len(from, until, step),
        },
    };
    usize::try_from(count).unwrap_or(usize::MAX)
}

fn fractional_len<T>(from: &T, until: &T, step: &T) -> usize
where
    T: Clone + Num + PartialOrd + ToPrimitive,
{
    match (from.to_f64(), until.to_f64(), step.to_f64()) {
        (Some(from), Some(until), Some(step)) => {
            let count = ((until - from) / step).ceil();
            // NaN fails the comparison, and the cast saturates
            if count > 0.0 {
                count as usize
            } else {
                0
            }
        }
        _ => generic_len(from, until, step),
    }
}

// Numbers with no primitive representation are assumed unbounded.
fn generic_len<T>(from: &T, until: &T, step: &T) -> usize
where
    T: Clone + Num + PartialOrd + ToPrimitive,
{
    let zero = T::zero();
    let (distance, stride) = if *step > zero {
        if until <= from {
            return 0;
        }
        (until.clone() - from.clone(), step.clone())
    } else {
        if until >= from {
            return 0;
        }
        (from.clone() - until.clone(), zero - step.clone())
    };

    let exact = (distance.clone() % stride.clone()).is_zero();
    (distance / stride)
        .to_usize()
        .map(|quotient| if exact { quotient } else { quotient.saturating_add(1) })
        .unwrap_or(usize::MAX)
}

/// Range of `init, f(init), f(f(init)), ...`.
#[derive(Debug, Clone)]
pub struct Iterate<T, F> {
    init: T,
    f: F,
}

impl<T, F> Iterate<T, F> {
    pub fn new(init: T, f: F) -> Self {
        Self { init, f }
    }
}

impl<T, F> IntoIterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;
    type IntoIter = IterateIter<T, F>;

    fn into_iter(self) -> Self::IntoIter {
        IterateIter {
            current: self.init,
            f: self.f,
            started: false,
        }
    }
}

owned_keeper! { [T, F] Iterate<T, F> }

/// Iterator of [Iterate].
#[derive(Debug, Clone)]
pub struct IterateIter<T, F> {
    current: T,
    f: F,
    started: bool,
}

impl<T, F> Iterator for IterateIter<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.started {
            self.current = (self.f)(&self.current);
        }
        self.started = true;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F> FusedIterator for IterateIter<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
}
