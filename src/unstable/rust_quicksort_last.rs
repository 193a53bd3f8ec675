use std::cmp::Ordering;

use quicksort_pivots::PivotStrategy;

sort_impl!("quicksort_pivot_last");

pub fn sort<T: Ord>(data: &mut [T]) {
    quicksort_pivots::sort(data, PivotStrategy::Last);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    quicksort_pivots::sort_by(data, PivotStrategy::Last, compare);
}
