//! Binary extrema and single-pass `minmax` over slices.
//!
//! Ties are left-biased: `min`/`max` return the first argument on equality,
//! and `minmax` keeps the first occurrence of a duplicated extreme (the
//! update rule is strict inequality).

use core::cmp::Ordering;

use crate::compare::{OrderError, Ordered};
use crate::comparator::{Comparator, Natural};

/// Smaller of two values; ties return `a`.
#[inline]
pub fn min<'a, T: Ordered>(a: &'a T, b: &'a T) -> &'a T {
    min_with(&Natural, a, b)
}

/// Larger of two values; ties return `a`.
#[inline]
pub fn max<'a, T: Ordered>(a: &'a T, b: &'a T) -> &'a T {
    max_with(&Natural, a, b)
}

/// `min` under an explicit comparator.
#[inline]
pub fn min_with<'a, T, C: Comparator<T>>(cmp: &C, a: &'a T, b: &'a T) -> &'a T {
    match cmp.compare(a, b) {
        Ordering::Greater => b,
        _ => a,
    }
}

/// `max` under an explicit comparator.
#[inline]
pub fn max_with<'a, T, C: Comparator<T>>(cmp: &C, a: &'a T, b: &'a T) -> &'a T {
    match cmp.compare(a, b) {
        Ordering::Less => b,
        _ => a,
    }
}

/// Smallest and largest element of `items` in one pass.
///
/// At most two `compare` calls per element after the first. A singleton
/// yields `(x, x)`; an empty slice is an error, never a default.
pub fn minmax<T: Ordered>(items: &[T]) -> Result<(&T, &T), OrderError> {
    minmax_with(&Natural, items)
}

/// `minmax` under an explicit comparator.
pub fn minmax_with<'a, T, C: Comparator<T>>(
    cmp: &C,
    items: &'a [T],
) -> Result<(&'a T, &'a T), OrderError> {
    let (first, rest) = items.split_first().ok_or(OrderError::EmptyInput)?;
    let mut lo = first;
    let mut hi = first;
    for x in rest {
        if cmp.compare(x, lo) == Ordering::Less {
            lo = x;
        } else if cmp.compare(x, hi) == Ordering::Greater {
            hi = x;
        }
    }
    Ok((lo, hi))
}
