//! Quicksort using a Lomuto partition with the last element of every range as pivot.
//!
//! [`recursive`] is the plain form that recurses into both sides of each partition. [`stack`]
//! visits the same ranges with an explicit work-stack, it performs the same comparisons and
//! swaps on each range and produces the same final order, without the unbounded recursion.
//!
//! Both are unstable, *O*(*n* \* log(*n*)) on average and *O*(*n*^2) for already sorted,
//! reversed and all-equal inputs.

pub mod recursive;
pub mod stack;

/// Partitions `v` around its last element and returns the final position of that pivot.
///
/// Afterwards every element left of the returned position compares true for
/// `is_le(elem, pivot)` and every element right of it compares false. Elements equal to the
/// pivot go left, their relative order is not preserved.
///
/// Only `swap` is used to move elements, so if `is_le` panics or does not implement a total
/// order, `v` still holds all of its original elements.
pub fn partition_last<T, F>(v: &mut [T], is_le: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let high = len - 1;
    let (v_without_pivot, pivot) = v.split_at_mut(high);
    let pivot = &pivot[0];

    // `le_count` is the length of the `<=` prefix, one past the last index it covers.
    let mut le_count = 0;
    for j in 0..high {
        if is_le(&v_without_pivot[j], pivot) {
            v_without_pivot.swap(le_count, j);
            le_count += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(le_count, high);

    le_count
}
