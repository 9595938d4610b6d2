//! The comparison contract and the relations derived from it.
//!
//! - `Ordered`: one required method, `compare`, returning a
//!   `core::cmp::Ordering`. Implementors promise a total order
//!   (deterministic, reflexively equal, antisymmetric, transitive);
//!   nothing here verifies that.
//! - `lt`/`le`/`gt`/`ge`/`eq`: direct mappings from the sign of `compare`.
//! - `OrderError`: shared error type for the fallible operations in
//!   `extrema` and `range`.

use core::cmp::Ordering;
use std::fmt;

/// Error type shared by all derived operations.
#[derive(Debug, PartialEq, Eq)]
pub enum OrderError {
    /// The result is undefined on an empty sequence.
    EmptyInput,
    /// A `low`/`high` bound pair that is itself mis-ordered.
    InvalidRange { reason: String },
}

impl OrderError {
    pub(crate) fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input: result is undefined"),
            Self::InvalidRange { reason } => write!(f, "invalid range: {reason}"),
        }
    }
}

impl std::error::Error for OrderError {}

/// A type with a total three-way comparison.
///
/// This is the whole contract a participating type supplies; everything
/// else in the crate is derived from it.
pub trait Ordered {
    fn compare(&self, other: &Self) -> Ordering;
}

/// Every `Ord` type participates with its natural order.
impl<T: Ord> Ordered for T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// `a < b` under the type's natural order.
#[inline]
pub fn lt<T: Ordered>(a: &T, b: &T) -> bool {
    a.compare(b) == Ordering::Less
}

/// `a <= b` under the type's natural order.
#[inline]
pub fn le<T: Ordered>(a: &T, b: &T) -> bool {
    a.compare(b) != Ordering::Greater
}

/// `a > b` under the type's natural order.
#[inline]
pub fn gt<T: Ordered>(a: &T, b: &T) -> bool {
    a.compare(b) == Ordering::Greater
}

/// `a >= b` under the type's natural order.
#[inline]
pub fn ge<T: Ordered>(a: &T, b: &T) -> bool {
    a.compare(b) != Ordering::Less
}

/// `a == b` under the type's natural order (order-equality, not `PartialEq`).
#[inline]
pub fn eq<T: Ordered>(a: &T, b: &T) -> bool {
    a.compare(b) == Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Artwork {
        price: u32,
    }

    impl Ordered for Artwork {
        fn compare(&self, other: &Self) -> Ordering {
            self.price.cmp(&other.price)
        }
    }

    #[test]
    fn relations_follow_compare_sign() {
        let cheap = Artwork { price: 100 };
        let pricey = Artwork { price: 200 };
        assert!(lt(&cheap, &pricey));
        assert!(le(&cheap, &pricey));
        assert!(gt(&pricey, &cheap));
        assert!(ge(&pricey, &cheap));
        assert!(!eq(&cheap, &pricey));
        // equal prices compare equal regardless of identity
        assert!(eq(&cheap, &Artwork { price: 100 }));
    }

    #[test]
    fn self_comparison_is_equal() {
        let a = Artwork { price: 471 };
        assert!(eq(&a, &a));
        assert!(le(&a, &a) && ge(&a, &a));
        assert!(!lt(&a, &a) && !gt(&a, &a));
    }

    #[test]
    fn ord_types_participate() {
        assert!(lt(&3_i64, &7_i64));
        assert!(eq(&"abc", &"abc"));
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            // Exactly one of lt/eq/gt holds for any pair.
            #[test]
            fn trichotomy(a in any::<i64>(), b in any::<i64>()) {
                let holds = [lt(&a, &b), eq(&a, &b), gt(&a, &b)];
                prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
            }

            #[test]
            fn reflexive_equality(a in any::<i64>()) {
                prop_assert!(eq(&a, &a));
            }

            #[test]
            fn lt_transitive(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
                if lt(&a, &b) && lt(&b, &c) {
                    prop_assert!(lt(&a, &c));
                }
            }

            #[test]
            fn lt_gt_antisymmetric(a in any::<i64>(), b in any::<i64>()) {
                prop_assert_eq!(lt(&a, &b), gt(&b, &a));
            }
        }
    }
}
