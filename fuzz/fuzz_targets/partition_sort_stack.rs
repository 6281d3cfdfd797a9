#![no_main]

use libfuzzer_sys::fuzz_target;

use growable_sort::partition_sort::stack as test_sort;
use growable_sort_fuzz::u8_as_i32;

fuzz_target!(|data: &[u8]| {
    let mut v = u8_as_i32(data);
    let mut expected = v.clone();

    test_sort::sort(&mut v);
    expected.sort_unstable();

    assert_eq!(v, expected);
});
