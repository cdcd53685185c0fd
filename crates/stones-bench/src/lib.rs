//! Benchmark profiles for the stones simulation.
//!
//! - [`reference_profile`]: a short input in the shape of a typical puzzle
//!   file (8 stones, values below one million).
//! - [`stress_profile`]: 1000 stones with values up to nine digits, giving
//!   a much wider distinct-value population in early rounds.
//!
//! Both are deterministic in `seed`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stones_core::Value;
use stones_engine::Histogram;

/// Eight stones with values in `0..1_000_000`.
pub fn reference_profile(seed: u64) -> Histogram {
    seeded_histogram(seed, 8, 1_000_000)
}

/// A thousand stones with values in `0..1_000_000_000`.
pub fn stress_profile(seed: u64) -> Histogram {
    seeded_histogram(seed, 1000, 1_000_000_000)
}

fn seeded_histogram(seed: u64, n: usize, max: Value) -> Histogram {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..max)).collect()
}
