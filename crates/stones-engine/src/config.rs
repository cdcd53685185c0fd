//! Simulation configuration and validation.

use std::error::Error;
use std::fmt;

// ── SimConfig ─────────────────────────────────────────────────────

/// Parameters for a [`HistogramPropagator`](crate::HistogramPropagator) run.
///
/// Validated by [`HistogramPropagator::new()`](crate::HistogramPropagator::new);
/// immutable for the lifetime of the propagator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of rounds [`run_with_report()`](crate::HistogramPropagator::run_with_report)
    /// applies. Zero returns the initial histogram unchanged. Default: 25.
    pub rounds: u32,
    /// Memo store entries to preallocate. Default: 4096.
    ///
    /// The distinct-value population of long runs settles in the low
    /// thousands, so the default avoids rehashing in the common case.
    pub memo_capacity: usize,
    /// Whether to record a [`RoundMetrics`](crate::RoundMetrics) entry per
    /// round. Default: true.
    pub collect_metrics: bool,
}

impl SimConfig {
    /// Default round count.
    pub const DEFAULT_ROUNDS: u32 = 25;

    /// Default memo store preallocation.
    pub const DEFAULT_MEMO_CAPACITY: usize = 4096;

    /// Largest accepted memo preallocation (entries).
    pub const MAX_MEMO_CAPACITY: usize = 1 << 24;

    /// A default config running `rounds` rounds.
    pub fn with_rounds(rounds: u32) -> Self {
        Self {
            rounds,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memo_capacity > Self::MAX_MEMO_CAPACITY {
            return Err(ConfigError::MemoCapacityTooLarge {
                requested: self.memo_capacity,
                max: Self::MAX_MEMO_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            memo_capacity: Self::DEFAULT_MEMO_CAPACITY,
            collect_metrics: true,
        }
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `memo_capacity` exceeds [`SimConfig::MAX_MEMO_CAPACITY`].
    MemoCapacityTooLarge {
        /// The configured capacity.
        requested: usize,
        /// The maximum accepted capacity.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoCapacityTooLarge { requested, max } => {
                write!(f, "memo_capacity {requested} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}
