macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, None);
    };
    ($name:expr, $max_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn max_len() -> Option<usize> {
                $max_len
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod growable_array;
pub mod partition_sort;

pub use growable_array::{Error, GrowableArray};
