//! Error types for the stones simulation.
//!
//! The rewrite rule is total for every value whose successors fit in a
//! [`Value`](crate::Value), and count merging is total while sums fit in a
//! [`Count`](crate::Count). These enums report the two ways a run can leave
//! that domain.

use std::error::Error;
use std::fmt;

use crate::id::RoundId;
use crate::transition::{Value, MULTIPLIER};

/// Errors from computing a transition or merging counts within one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// An odd-digit value whose product with the multiplier exceeds the
    /// value width.
    ValueOverflow {
        /// The value that could not be multiplied.
        value: Value,
    },
    /// Adding a count to a histogram entry overflowed the count width.
    CountOverflow {
        /// The histogram key whose count overflowed.
        value: Value,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOverflow { value } => {
                write!(f, "value {value} * {MULTIPLIER} overflows u64")
            }
            Self::CountOverflow { value } => {
                write!(f, "count for value {value} overflows u128")
            }
        }
    }
}

impl Error for StepError {}

/// A [`StepError`] tagged with the round in which it occurred.
///
/// Returned by multi-round runs; the histogram from before the failing
/// round is discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunError {
    /// The round that failed.
    pub round: RoundId,
    /// The underlying error.
    pub kind: StepError,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}: {}", self.round, self.kind)
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_overflow_names_value() {
        let e = StepError::ValueOverflow { value: 123 };
        assert_eq!(e.to_string(), "value 123 * 2024 overflows u64");
    }

    #[test]
    fn run_error_prefixes_round_and_chains_source() {
        let e = RunError {
            round: RoundId(3),
            kind: StepError::CountOverflow { value: 9 },
        };
        assert_eq!(e.to_string(), "round 3: count for value 9 overflows u128");
        let src = e.source().unwrap();
        assert_eq!(src.to_string(), "count for value 9 overflows u128");
    }
}
