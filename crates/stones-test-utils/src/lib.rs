//! Test utilities for stones development.
//!
//! - [`ReferenceSimulator`]: expands every stone individually, as a
//!   brute-force oracle for the histogram engine on small inputs.
//! - [`fixtures`]: the worked sample input and its known totals.
//! - [`random_stones`] / [`shuffled`]: seeded generators so property
//!   tests and benchmarks are reproducible.
//!
//! Depends only on `stones-core`; results are plain `BTreeMap`s so the
//! crates under test can compare against them without a dependency cycle.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stones_core::{Count, Transition, Value};

/// Brute-force simulator over a flat list of stones.
///
/// Each round rebuilds the list stone by stone with
/// [`Transition::compute`]; no memoization, no histogram. Memory grows with
/// the stone count, so keep rounds small (under ~30 for short inputs).
#[derive(Clone, Debug, Default)]
pub struct ReferenceSimulator {
    stones: Vec<Value>,
}

impl ReferenceSimulator {
    pub fn new(stones: Vec<Value>) -> Self {
        Self { stones }
    }

    /// Advance one round. Panics on values outside the supported domain.
    pub fn blink(&mut self) {
        let mut next = Vec::with_capacity(self.stones.len() * 2);
        for &value in &self.stones {
            let t = Transition::compute(value).expect("reference input overflowed");
            next.extend(t.successors());
        }
        self.stones = next;
    }

    pub fn blink_n(&mut self, rounds: u32) {
        for _ in 0..rounds {
            self.blink();
        }
    }

    pub fn stones(&self) -> &[Value] {
        &self.stones
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// The current stones tallied by value.
    pub fn counts(&self) -> BTreeMap<Value, Count> {
        let mut out = BTreeMap::new();
        for &value in &self.stones {
            *out.entry(value).or_insert(0) += 1;
        }
        out
    }
}

/// `n` stone values drawn from `0..max`, reproducible from `seed`.
pub fn random_stones(seed: u64, n: usize, max: Value) -> Vec<Value> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..max)).collect()
}

/// A seeded permutation of `items`.
pub fn shuffled<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = items.to_vec();
    out.shuffle(&mut rng);
    out
}
