//! Core types for the stones simulation.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! value and count types, the [`Transition`] rewrite rule, round
//! identifiers, and the error enums shared by the engine and its callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod transition;

pub use error::{RunError, StepError};
pub use id::RoundId;
pub use transition::{digit_count, Count, Transition, Value, MULTIPLIER};
