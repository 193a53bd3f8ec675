//! Input patterns for testing and benchmarking sort implementations.
//!
//! Every generator re-seeds from [`random_init_seed`], so repeated calls in
//! the same process produce the same data and failures reproduce across
//! processes via the `OVERRIDE_SEED` environment variable.

use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::distributions::uniform::SampleRange;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Random but repeatable for every invocation within the same process. Set
/// `OVERRIDE_SEED` to pin it across processes.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(raw) => u64::from_str(&raw).expect("OVERRIDE_SEED must be a u64"),
        Err(_) => rand::thread_rng().gen(),
    })
}

fn pattern_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Full-range uniform values.
pub fn random(len: usize) -> Vec<i32> {
    pattern_rng()
        .sample_iter(rand::distributions::Standard)
        .take(len)
        .collect()
}

/// Uniform values restricted to `range`. Narrow ranges yield duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: SampleRange<i32> + Clone,
{
    let mut rng = pattern_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian keys: a handful of values dominate, the tail is rare. `exponent`
/// controls how skewed the duplication is.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = pattern_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values arranged into `saws` ascending runs.
pub fn ascending_saw(len: usize, saws: usize) -> Vec<i32> {
    let mut vals = random(len);
    let run_len = (len / saws.max(1)).max(1);
    for run in vals.chunks_mut(run_len) {
        run.sort_unstable();
    }
    vals
}

/// Random values arranged into `saws` descending runs.
pub fn descending_saw(len: usize, saws: usize) -> Vec<i32> {
    let mut vals = random(len);
    let run_len = (len / saws.max(1)).max(1);
    for run in vals.chunks_mut(run_len) {
        run.sort_unstable_by(|a, b| b.cmp(a));
    }
    vals
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);
    let (rise, fall) = vals.split_at_mut(len / 2);
    rise.sort_unstable();
    fall.sort_unstable_by(|a, b| b.cmp(a));
    vals
}
