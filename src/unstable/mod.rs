// Iterative quicksort drawing pivots uniformly at random.
pub mod rust_quicksort_random;

// Iterative quicksort always picking the first index of a range.
pub mod rust_quicksort_first;

// Iterative quicksort picking the lower middle of a range.
pub mod rust_quicksort_middle;

// Iterative quicksort always picking the last index of a range.
pub mod rust_quicksort_last;
