pub trait Sort {
    fn name() -> String;

    /// Largest input the generic tests should feed this implementation, `None` means no limit.
    fn max_len() -> Option<usize> {
        None
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
