//! Input distributions for the test and benchmark suites.
//!
//! Every pattern draws from one process-wide seed so that a failing run can
//! be replayed, see [`random_init_seed`].

use std::cmp;
use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

static RESEED_EACH_CALL: AtomicBool = AtomicBool::new(false);

/// Makes every subsequent pattern call draw a fresh seed instead of the
/// memoized one.
///
/// The benchmarks call this once at startup. Feeding a sort hundreds of
/// samples of the exact same input measures the branch predictor, not the
/// sort.
pub fn use_random_seed_each_time() {
    RESEED_EACH_CALL.store(true, Ordering::Release);
}

/// The seed behind every pattern in this process.
///
/// Picked at random on first use and then memoized. Set the `OVERRIDE_SEED`
/// environment variable to replay a specific run, the test harness prints
/// the seed it picked. [`use_random_seed_each_time`] takes precedence over
/// both.
pub fn random_init_seed() -> u64 {
    if RESEED_EACH_CALL.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(value) => u64::from_str(&value).expect("OVERRIDE_SEED must be a u64"),
        Err(_) => thread_rng().gen(),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly random over the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : .
    // :.:::.:
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly random within `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let mut rng = seeded_rng();
    let dist: Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Zeros and ones, the degenerate two-value input.
pub fn random_binary(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=1)
}

/// Zipfian distributed values, low ranks vastly over-represented.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = seeded_rng();

    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// `0..len`, already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `0..len` reversed, sorted the wrong way around.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// A single repeated value.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![7; len]
}

/// Random values arranged into `saw_count` runs that alternate between
/// ascending and descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.  :.
    // ::.:::.:::.
    let mut vals = random(len);
    if len == 0 {
        return vals;
    }

    let chunk_len = (len / saw_count.max(1)).max(1);
    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&val| cmp::Reverse(val));
        }
    }

    vals
}

/// Random values, first half ascending and second half descending.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.
    let mut vals = random(len);

    let (rise, fall) = vals.split_at_mut(len / 2);
    rise.sort_unstable();
    fall.sort_unstable_by_key(|&val| cmp::Reverse(val));

    vals
}
