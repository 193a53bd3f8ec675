use std::cmp::Ordering;

use quicksort_pivots::PivotStrategy;

sort_impl!("quicksort_pivot_middle");

pub fn sort<T: Ord>(data: &mut [T]) {
    quicksort_pivots::sort(data, PivotStrategy::Middle);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    quicksort_pivots::sort_by(data, PivotStrategy::Middle, compare);
}
