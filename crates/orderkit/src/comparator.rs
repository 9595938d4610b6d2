//! Explicit comparators for orders other than a type's natural one.
//!
//! Every operation in `extrema`, `range`, and `sort` has a `_with` variant
//! parameterized over a `Comparator`; the natural-order entry points wrap
//! those with `Natural`, so the derivation logic exists once.

use core::cmp::Ordering;

use crate::compare::Ordered;

/// A standalone comparison strategy over `T`.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The type's own `Ordered::compare`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ordered> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.compare(b)
    }
}

/// Flips the verdict of an inner comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Compares by a projected key.
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    K: Ordered,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).compare(&(self.0)(b))
    }
}

/// Lifts an ad-hoc closure into a comparator.
#[derive(Clone, Copy, Debug)]
pub struct FnCmp<F>(pub F);

impl<T, F> Comparator<T> for FnCmp<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
