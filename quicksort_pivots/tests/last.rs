use quicksort_pivots::PivotStrategy;
use sort_test_tools::{instantiate_sort_tests, Sort};

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "quicksort_pivot_last".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        quicksort_pivots::sort(arr, PivotStrategy::Last);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        quicksort_pivots::sort_by(arr, PivotStrategy::Last, compare);
    }
}

instantiate_sort_tests!(SortImpl);
