//! Non-recursive quicksort, pending ranges live on an explicit work-stack.

use std::cmp::Ordering;
use std::mem;

use super::partition_last;

sort_impl!("partition_sort_stack_unstable");

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

fn quicksort<T, F>(v_full: &mut [T], is_le: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v_full.len();
    if len < 2 {
        return;
    }

    // Handling the smaller side first keeps about `log2(len) + 1` ranges pending. `max_depth`
    // over-allocates, so the stack never has to reallocate.
    let max_depth = 2 * (len.ilog2() as usize + 1);

    // Pending `begin..end` ranges of `v_full`.
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(max_depth);
    stack.push((0, len));

    while let Some((v_begin_idx, v_end_idx)) = stack.pop() {
        let v = &mut v_full[v_begin_idx..v_end_idx];
        if v.len() < 2 {
            continue;
        }

        let pivot_pos = v_begin_idx + partition_last(v, is_le);

        let left = (v_begin_idx, pivot_pos);
        let right = (pivot_pos + 1, v_end_idx);

        // Push the larger side first so the smaller side is popped next.
        if (left.1 - left.0) < (right.1 - right.0) {
            stack.push(right);
            stack.push(left);
        } else {
            stack.push(left);
            stack.push(right);
        }
    }
}
