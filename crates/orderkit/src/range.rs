//! Range membership and identity-preserving clamping.
//!
//! Both operations validate the bound pair first: a `low` that exceeds
//! `high` is an `InvalidRange` error before any other comparison runs,
//! and no partial result is produced.
//!
//! `clamp` returns a borrow of one of its three inputs, never a copy, so
//! identity is observable via `std::ptr::eq`.

use core::cmp::Ordering;

use crate::compare::{OrderError, Ordered};
use crate::comparator::{Comparator, Natural};

/// True iff `low <= x <= high`.
pub fn between<T: Ordered>(x: &T, low: &T, high: &T) -> Result<bool, OrderError> {
    between_with(&Natural, x, low, high)
}

/// `between` under an explicit comparator.
pub fn between_with<T, C: Comparator<T>>(
    cmp: &C,
    x: &T,
    low: &T,
    high: &T,
) -> Result<bool, OrderError> {
    check_bounds(cmp, low, high)?;
    Ok(cmp.compare(low, x) != Ordering::Greater && cmp.compare(x, high) != Ordering::Greater)
}

/// `x` forced into `[low, high]`: the `low` borrow if `x < low`, the
/// `high` borrow if `x > high`, otherwise `x` itself.
pub fn clamp<'a, T: Ordered>(x: &'a T, low: &'a T, high: &'a T) -> Result<&'a T, OrderError> {
    clamp_with(&Natural, x, low, high)
}

/// `clamp` under an explicit comparator.
pub fn clamp_with<'a, T, C: Comparator<T>>(
    cmp: &C,
    x: &'a T,
    low: &'a T,
    high: &'a T,
) -> Result<&'a T, OrderError> {
    check_bounds(cmp, low, high)?;
    if cmp.compare(x, low) == Ordering::Less {
        return Ok(low);
    }
    if cmp.compare(x, high) == Ordering::Greater {
        return Ok(high);
    }
    Ok(x)
}

fn check_bounds<T, C: Comparator<T>>(cmp: &C, low: &T, high: &T) -> Result<(), OrderError> {
    if cmp.compare(low, high) == Ordering::Greater {
        return Err(OrderError::invalid_range("low exceeds high"));
    }
    Ok(())
}
