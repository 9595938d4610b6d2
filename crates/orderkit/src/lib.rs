//! Ordering primitives derived from a single three-way comparison.
//!
//! Purpose
//! - A type declares one comparison primitive (`Ordered::compare`) and this
//!   crate derives the rest: relational predicates, extrema, range queries,
//!   clamping, and stable sorting.
//! - Explicit comparators (`Comparator`) cover the cases where the ordering
//!   is not the type's natural one (reversed order, key projection, ad-hoc
//!   closures).
//!
//! Why this design
//! - The derivation is an explicit capability contract, not implicit trait
//!   magic: every operation is a plain function over `&T`, and every fallible
//!   operation returns `Result<_, OrderError>`.
//! - `clamp` and the extrema return borrows of their inputs, so callers can
//!   observe identity (`std::ptr::eq`) rather than receiving equal copies.

pub mod compare;
pub mod comparator;
pub mod extrema;
pub mod range;
pub mod sort;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use compare::{eq, ge, gt, le, lt, OrderError, Ordered};
pub use comparator::{ByKey, Comparator, FnCmp, Natural, Reversed};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compare::{eq, ge, gt, le, lt, OrderError, Ordered};
    pub use crate::comparator::{ByKey, Comparator, FnCmp, Natural, Reversed};
    pub use crate::extrema::{max, max_with, min, min_with, minmax, minmax_with};
    pub use crate::range::{between, between_with, clamp, clamp_with};
    pub use crate::sort::{sorted, sorted_with};
}
