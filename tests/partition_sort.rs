use std::cmp::Ordering;
use std::thread;

use growable_sort::partition_sort::{partition_last, recursive, stack};

use sort_test_tools::patterns;

fn by_key(a: &(i32, char), b: &(i32, char)) -> Ordering {
    a.0.cmp(&b.0)
}

fn count_comparisons(
    v: &mut [i32],
    sort_by: impl Fn(&mut [i32], &mut dyn FnMut(&i32, &i32) -> Ordering),
) -> usize {
    let mut comp_count = 0;
    sort_by(v, &mut |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    comp_count
}

#[test]
fn partition_places_pivot() {
    let mut v = [3, 7, 1, 5, 4];

    let pivot_pos = partition_last(&mut v, &mut |a, b| a <= b);

    assert_eq!(pivot_pos, 2);
    assert_eq!(v, [3, 1, 4, 5, 7]);
}

#[test]
fn partition_ties_go_left() {
    let mut v = [5, 5, 5, 5];

    // Every element compares `<=` the pivot, so the pivot stays at the end.
    assert_eq!(partition_last(&mut v, &mut |a, b| a <= b), 3);

    let mut v = [2, 9, 2, 2];
    assert_eq!(partition_last(&mut v, &mut |a, b| a <= b), 2);
    assert_eq!(v, [2, 2, 2, 9]);
}

#[test]
fn partition_smallest_pivot() {
    let mut v = [8, 6, 7, 1];

    assert_eq!(partition_last(&mut v, &mut |a, b| a <= b), 0);
    assert_eq!(v, [1, 6, 7, 8]);
}

#[test]
fn partition_trivial_inputs() {
    let mut empty: [i32; 0] = [];
    assert_eq!(partition_last(&mut empty, &mut |a, b| a <= b), 0);

    let mut single = [42];
    assert_eq!(partition_last(&mut single, &mut |a, b| a <= b), 0);
    assert_eq!(single, [42]);
}

#[test]
fn unstable_on_ties() {
    // The first partition swaps the pivot with `a`, which moves it behind `b`.
    let expected = [(0, 'p'), (1, 'b'), (1, 'a')];

    let mut v = [(1, 'a'), (1, 'b'), (0, 'p')];
    recursive::sort_by(&mut v, by_key);
    assert_eq!(v, expected);

    let mut v = [(1, 'a'), (1, 'b'), (0, 'p')];
    stack::sort_by(&mut v, by_key);
    assert_eq!(v, expected);
}

#[test]
fn recursive_and_stack_agree() {
    let keys = patterns::random_uniform(2_000, 0..16);
    let input = keys
        .iter()
        .enumerate()
        .map(|(i, key)| (*key, char::from(b'a' + (i % 26) as u8)))
        .collect::<Vec<_>>();

    let mut recursive_sorted = input.clone();
    recursive::sort_by(&mut recursive_sorted, by_key);

    let mut stack_sorted = input;
    stack::sort_by(&mut stack_sorted, by_key);

    // Only the keys are compared, agreeing on the payload order means both ran the same swaps.
    assert_eq!(recursive_sorted, stack_sorted);
    assert!(recursive_sorted.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn quadratic_comparisons_on_sorted_input() {
    // Each partition of a sorted range compares every element against the last one and peels
    // off only the pivot.
    let len = 100;
    let expected = len * (len - 1) / 2;

    for pattern in [patterns::ascending, patterns::all_equal] {
        let mut v = pattern(len);
        let comps = count_comparisons(&mut v, |v, compare| recursive::sort_by(v, compare));
        assert_eq!(comps, expected);

        let mut v = pattern(len);
        let comps = count_comparisons(&mut v, |v, compare| stack::sort_by(v, compare));
        assert_eq!(comps, expected);
    }
}

#[test]
fn permutation_preserved_with_duplicates() {
    for len in [0, 1, 2, 3, 17, 100, 1_000] {
        let input = patterns::random_uniform(len, 0..=3);

        let mut counts_before = [0usize; 4];
        for val in &input {
            counts_before[*val as usize] += 1;
        }

        let mut v = input.clone();
        recursive::sort(&mut v);

        let mut counts_after = [0usize; 4];
        for val in &v {
            counts_after[*val as usize] += 1;
        }

        assert_eq!(counts_before, counts_after);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn stack_handles_deep_inputs() {
    // A recursive quicksort would nest once per element here.
    let mut v = patterns::ascending(10_000);
    v.reverse();

    stack::sort(&mut v);

    assert_eq!(v, patterns::ascending(10_000));
}

#[test]
fn recursive_deep_inputs_with_large_stack() {
    let handle = thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(|| {
            let mut v = patterns::all_equal(10_000);
            v.push(-1);

            recursive::sort(&mut v);

            v
        })
        .unwrap();

    let v = handle.join().unwrap();

    assert_eq!(v[0], -1);
    assert!(v[1..].iter().all(|val| *val == 66));
}

#[test]
fn zero_sized_types() {
    let mut v = [(); 64];

    recursive::sort(&mut v);
    stack::sort_by(&mut v, |a, b| a.cmp(b));

    assert_eq!(v.len(), 64);
}
