//! Histogram propagation engine for the stones simulation.
//!
//! Two components, in dependency order:
//!
//! ```text
//! HistogramPropagator (round loop, owns the engine)
//! └── TransitionEngine (memoized Transition::compute)
//!     └── memo store: Value → Transition, grows monotonically
//! ```
//!
//! Each round reads the current [`Histogram`] and accumulates a fresh one;
//! the fresh histogram then replaces the current one by move. Rounds are
//! strictly sequential and single-threaded.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod histogram;
pub mod memo;
pub mod metrics;
pub mod propagator;

pub use config::{ConfigError, SimConfig};
pub use histogram::Histogram;
pub use memo::{MemoStats, TransitionEngine};
pub use metrics::{RoundMetrics, RunReport};
pub use propagator::HistogramPropagator;
