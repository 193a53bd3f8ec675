use rand::Rng;

use crate::pivot::PivotStrategy;

/// Sorts `v` without recursion, keeping pending sub-ranges on an explicit
/// stack so partition depth never translates into call depth.
pub(crate) fn quicksort<T, F, R>(v: &mut [T], strategy: PivotStrategy, rng: &mut R, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Typical depth for balanced partitions is `2 * floor(log2(len))`; skewed
    // pivot choices grow the stack past the hint. The binary OR by one
    // eliminates the zero-check in the logarithm.
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(2 * (len | 1).ilog2() as usize);
    stack.push((0, len - 1));

    while let Some((low, high)) = stack.pop() {
        // Ranges of one element (or degenerate bounds) are already sorted.
        if low >= high {
            continue;
        }

        let p = partition(v, low, high, strategy, rng, is_less);

        // The pivot is final at `p`; only the flanks still need work. Both
        // sub-ranges exclude `p`, so every pop strictly shrinks the unsorted
        // span and the loop terminates for any comparison result.
        if p + 1 < high {
            stack.push((p + 1, high));
        }
        if low + 1 < p {
            stack.push((low, p - 1));
        }
    }
}

/// Partitions `v[low..=high]` around a strategy-selected pivot, in place.
///
/// On return some index `p` holds the pivot value, everything in `low..p` is
/// strictly less than it and everything in `p+1..=high` is greater or equal.
/// Returns `p`.
fn partition<T, F, R>(
    v: &mut [T],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    rng: &mut R,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    debug_assert!(low < high && high < v.len());

    // Park the pivot at the end of the range; the scan below never touches
    // index `high`, so the pivot value stays put until the final swap.
    let pivot_pos = strategy.select_pivot(low, high, rng);
    v.swap(pivot_pos, high);

    // `boundary` is the slot the next less-than element goes to; everything
    // in `low..boundary` already compares strictly less than the pivot.
    let mut boundary = low;
    for idx in low..high {
        if is_less(&v[idx], &v[high]) {
            v.swap(boundary, idx);
            boundary += 1;
        }
    }

    // The pivot's final position sits between the two zones.
    v.swap(boundary, high);
    boundary
}
