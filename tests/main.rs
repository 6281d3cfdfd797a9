mod recursive {
    use sort_test_tools::instantiate_sort_tests;

    type SortImpl = growable_sort::partition_sort::recursive::SortImpl;

    instantiate_sort_tests!(SortImpl);
}

mod stack {
    use sort_test_tools::instantiate_sort_tests;

    type SortImpl = growable_sort::partition_sort::stack::SortImpl;

    instantiate_sort_tests!(SortImpl);
}
