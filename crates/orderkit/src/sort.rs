//! Stable sorting driven solely by the comparison primitive.
//!
//! Bottom-up merge sort: O(n log n) comparisons on every input shape
//! (already sorted, reverse sorted, all-equal), no recursion, and stable
//! because the merge takes from the left run on ties.

use core::cmp::Ordering;

use crate::compare::Ordered;
use crate::comparator::{Comparator, Natural};

/// New sequence holding `items` in ascending natural order.
pub fn sorted<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    sorted_with(items, &Natural)
}

/// New sequence holding `items` ascending under `cmp`.
pub fn sorted_with<T: Clone, C: Comparator<T>>(items: &[T], cmp: &C) -> Vec<T> {
    let mut buf: Vec<T> = items.to_vec();
    let n = buf.len();
    if n < 2 {
        return buf;
    }
    let mut aux: Vec<T> = buf.clone();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo < n {
            let mid = usize::min(lo + width, n);
            let hi = usize::min(lo + 2 * width, n);
            merge(&buf[lo..mid], &buf[mid..hi], &mut aux[lo..hi], cmp);
            lo = hi;
        }
        std::mem::swap(&mut buf, &mut aux);
        width *= 2;
    }
    buf
}

/// Merge two adjacent sorted runs into `out`; ties take from `left` first.
fn merge<T: Clone, C: Comparator<T>>(left: &[T], right: &[T], out: &mut [T], cmp: &C) {
    debug_assert_eq!(left.len() + right.len(), out.len());
    let mut i = 0;
    let mut j = 0;
    for slot in out.iter_mut() {
        let take_left = i < left.len()
            && (j >= right.len() || cmp.compare(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
