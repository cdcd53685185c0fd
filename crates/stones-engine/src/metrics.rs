//! Per-round metrics and the run report.
//!
//! [`RoundMetrics`] captures population and cache data for a single round;
//! [`RunReport`] bundles the final histogram with the collected metrics.

use stones_core::{Count, RoundId};

use crate::histogram::Histogram;

/// Population, cache, and timing data for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundMetrics {
    /// The round these metrics describe.
    pub round: RoundId,
    /// Distinct values in the histogram after the round.
    pub distinct_values: usize,
    /// Total stones after the round.
    pub total_stones: Count,
    /// Memo store size after the round.
    pub memo_len: usize,
    /// Memo lookups answered from cache during the round.
    pub memo_hits: u64,
    /// Memo entries computed during the round.
    pub memo_misses: u64,
    /// Wall-clock time for the round, in microseconds.
    pub elapsed_us: u64,
}

/// Outcome of [`HistogramPropagator::run_with_report()`](crate::HistogramPropagator::run_with_report).
#[derive(Clone, Debug)]
pub struct RunReport {
    /// The histogram after the last round.
    pub histogram: Histogram,
    /// Sum of all counts in `histogram`.
    pub total: Count,
    /// Number of rounds applied.
    pub rounds: u32,
    /// One entry per round, in order. Empty when metrics collection is off.
    pub rounds_metrics: Vec<RoundMetrics>,
    /// Wall-clock time for the whole run, in microseconds.
    pub elapsed_us: u64,
}

impl RunReport {
    /// Stone totals per round, starting with round 1.
    pub fn totals(&self) -> impl Iterator<Item = Count> + '_ {
        self.rounds_metrics.iter().map(|m| m.total_stones)
    }
}
