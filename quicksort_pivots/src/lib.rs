//! Iterative quicksort over mutable slices, parameterized by pivot selection.
//!
//! The driver keeps pending sub-ranges on an explicit stack instead of
//! recursing, and the pivot choice is abstracted behind [`PivotStrategy`] so
//! the same engine can be benchmarked under different selection rules. All
//! variants sort in place, ascending, and none of them is stable.

use std::cmp::Ordering;

use rand::Rng;

pub mod pivot;
mod quicksort;

pub use pivot::PivotStrategy;

/// Sorts `v` in ascending order, choosing pivots according to `strategy`.
///
/// [`PivotStrategy::Random`] draws from the thread-local generator; use
/// [`sort_with_rng`] to supply a seeded one for reproducible runs.
pub fn sort<T: Ord>(v: &mut [T], strategy: PivotStrategy) {
    sort_by(v, strategy, |a, b| a.cmp(b));
}

/// Sorts `v` with a caller-supplied comparison.
///
/// A comparison that is not a total order yields some unspecified permutation
/// of the input, never a crash or hang.
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], strategy: PivotStrategy, compare: F) {
    sort_by_with_rng(v, strategy, &mut rand::thread_rng(), compare);
}

/// Sorts `v`, drawing random pivots from `rng`.
pub fn sort_with_rng<T: Ord, R: Rng>(v: &mut [T], strategy: PivotStrategy, rng: &mut R) {
    sort_by_with_rng(v, strategy, rng, |a, b| a.cmp(b));
}

/// Fully general entry point: caller-supplied comparison and pivot generator.
pub fn sort_by_with_rng<T, R, F>(v: &mut [T], strategy: PivotStrategy, rng: &mut R, mut compare: F)
where
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort::quicksort(v, strategy, rng, &mut |a, b| compare(a, b) == Ordering::Less);
}
