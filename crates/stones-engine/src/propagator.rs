//! The round loop.
//!
//! [`HistogramPropagator`] owns a [`TransitionEngine`] and advances a
//! [`Histogram`] one round at a time. A round reads every entry of the
//! current histogram, looks up its transition, and adds the entry's count
//! to each successor in a fresh histogram. The fresh histogram replaces
//! the current one only after every entry has been processed.
//!
//! Merging is integer addition, so the order in which entries are visited
//! never affects the result.

use std::time::{Duration, Instant};

use stones_core::{RoundId, RunError, StepError};

use crate::config::{ConfigError, SimConfig};
use crate::histogram::Histogram;
use crate::memo::TransitionEngine;
use crate::metrics::{RoundMetrics, RunReport};

/// Drives rounds of the rewrite rule over a histogram.
///
/// The memo store persists across calls, so repeated runs on one
/// propagator reuse every transition computed so far.
#[derive(Debug)]
pub struct HistogramPropagator {
    engine: TransitionEngine,
    config: SimConfig,
}

impl HistogramPropagator {
    /// Create a propagator with an empty memo store.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            engine: TransitionEngine::with_capacity(config.memo_capacity),
            config,
        })
    }

    /// The configuration this propagator was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The transition engine and its memo store.
    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    /// Apply one round to `current` and return the next histogram.
    pub fn step(&mut self, current: &Histogram) -> Result<Histogram, StepError> {
        let mut next = Histogram::with_capacity(current.len());
        for (value, count) in current.iter() {
            let t = self.engine.get_transition(value)?;
            next.add(t.primary, count)?;
            if let Some(right) = t.secondary {
                next.add(right, count)?;
            }
        }
        Ok(next)
    }

    /// Apply `rounds` rounds to `initial` and return the final histogram.
    ///
    /// Zero rounds returns `initial` unchanged.
    pub fn run(&mut self, initial: Histogram, rounds: u32) -> Result<Histogram, RunError> {
        let (histogram, _) = self.run_rounds(initial, rounds, false)?;
        Ok(histogram)
    }

    /// Apply `config.rounds` rounds to `initial`, returning the final
    /// histogram, its total, and per-round metrics.
    pub fn run_with_report(&mut self, initial: Histogram) -> Result<RunReport, RunError> {
        let start = Instant::now();
        let rounds = self.config.rounds;
        let (histogram, rounds_metrics) =
            self.run_rounds(initial, rounds, self.config.collect_metrics)?;
        let total = histogram.total().map_err(|kind| RunError {
            round: RoundId(rounds),
            kind,
        })?;
        let elapsed_us = micros(start.elapsed());

        tracing::info!(
            rounds,
            total = %total,
            distinct = histogram.len(),
            memo_len = self.engine.memo_len(),
            elapsed_us,
            "run complete"
        );

        Ok(RunReport {
            histogram,
            total,
            rounds,
            rounds_metrics,
            elapsed_us,
        })
    }

    fn run_rounds(
        &mut self,
        initial: Histogram,
        rounds: u32,
        collect: bool,
    ) -> Result<(Histogram, Vec<RoundMetrics>), RunError> {
        let mut current = initial;
        let mut metrics = Vec::with_capacity(if collect { rounds as usize } else { 0 });
        let mut round = RoundId(0);

        for _ in 0..rounds {
            round = round.next();
            let before = self.engine.memo_stats();
            let start = Instant::now();

            let next = self.step(&current).map_err(|kind| {
                tracing::warn!(%round, error = %kind, "round failed");
                RunError { round, kind }
            })?;
            let elapsed_us = micros(start.elapsed());
            let after = self.engine.memo_stats();

            tracing::debug!(
                %round,
                distinct = next.len(),
                memo_len = self.engine.memo_len(),
                "round complete"
            );

            if collect {
                let total_stones = next.total().map_err(|kind| RunError { round, kind })?;
                metrics.push(RoundMetrics {
                    round,
                    distinct_values: next.len(),
                    total_stones,
                    memo_len: self.engine.memo_len(),
                    memo_hits: after.hits - before.hits,
                    memo_misses: after.misses - before.misses,
                    elapsed_us,
                });
            }
            current = next;
        }

        Ok((current, metrics))
    }
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
