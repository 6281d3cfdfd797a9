//! Basic recursive quicksort.

use std::cmp::Ordering;
use std::mem;

use super::partition_last;

/// Largest input the generic sort tests feed this implementation. Sorted, reversed and
/// all-equal inputs nest one call per element, larger ones can exhaust a test thread's stack.
pub const MAX_TEST_LEN: usize = 2_048;

sort_impl!("partition_sort_recursive_unstable", Some(MAX_TEST_LEN));

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.le(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) != Ordering::Greater);
}

// --- IMPL ---

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_le: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    quicksort(v, &mut is_le);
}

fn quicksort<T, F>(v: &mut [T], is_le: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let pivot_pos = partition_last(v, is_le);

    // Split the slice into `left`, `pivot`, and `right`.
    let (left, right) = v.split_at_mut(pivot_pos);
    let right = &mut right[1..];

    quicksort(left, is_le);
    quicksort(right, is_le);
}
