//! Testbed comparing one iterative quicksort under four pivot selection
//! strategies. The strategy-bound variants live in [`unstable`]; correctness
//! comes from the shared `sort_test_tools` suite and timing from the
//! criterion bench.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod unstable;
