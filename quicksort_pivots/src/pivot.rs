use rand::Rng;

/// Pivot selection strategy for the quicksort driver.
///
/// A closed set rather than an arbitrary callable: every strategy the testbed
/// compares is known up front, and the enum keeps variant names stable for
/// benchmark labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PivotStrategy {
    /// Uniformly random index in the range. Expected O(n log n) on any input
    /// arrangement.
    Random,
    /// Always the first index. Degrades to O(n^2) on already-sorted input.
    First,
    /// The lower middle of the range.
    Middle,
    /// Always the last index. Degrades to O(n^2) on reverse-sorted input.
    Last,
}

impl PivotStrategy {
    pub const ALL: [PivotStrategy; 4] = [
        PivotStrategy::Random,
        PivotStrategy::First,
        PivotStrategy::Middle,
        PivotStrategy::Last,
    ];

    /// Selects a pivot index in `low..=high`.
    ///
    /// Only `Random` consumes entropy from `rng`; the deterministic variants
    /// ignore it.
    pub fn select_pivot<R: Rng>(self, low: usize, high: usize, rng: &mut R) -> usize {
        debug_assert!(low <= high);

        match self {
            PivotStrategy::Random => rng.gen_range(low..=high),
            PivotStrategy::First => low,
            // Rounds toward `low` on even-length ranges.
            PivotStrategy::Middle => low + (high - low) / 2,
            PivotStrategy::Last => high,
        }
    }
}
