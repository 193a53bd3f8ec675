use std::cmp::Ordering;

use quicksort_pivots::PivotStrategy;

sort_impl!("quicksort_pivot_random");

pub fn sort<T: Ord>(data: &mut [T]) {
    quicksort_pivots::sort(data, PivotStrategy::Random);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    quicksort_pivots::sort_by(data, PivotStrategy::Random, compare);
}
