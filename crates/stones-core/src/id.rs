//! Strongly-typed round identifier.

use std::fmt;

/// One-based index of a propagation round.
///
/// `RoundId(1)` is the first application of the rewrite rule to the
/// initial histogram. `RoundId(0)` names the initial histogram itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u32);

impl RoundId {
    /// The round that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoundId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
