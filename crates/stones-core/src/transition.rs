//! The stone rewrite rule.
//!
//! Every value rewrites to one or two successors:
//!
//! | Value | Successors |
//! |-------|------------|
//! | `0` | `1` |
//! | even number of decimal digits | left half, right half |
//! | otherwise | `value * 2024` |
//!
//! Halves are split numerically by a power of ten, so the right half loses
//! its leading zeros (`1000` becomes `10` and `0`). All arithmetic is exact
//! integer arithmetic.

use smallvec::SmallVec;

use crate::error::StepError;

/// The value carried by a stone.
pub type Value = u64;

/// Number of stones sharing a value.
///
/// Wider than [`Value`]: stone populations roughly double every two
/// rounds and exceed `u64` long before the values themselves do.
pub type Count = u128;

/// Factor applied to values with an odd number of digits.
pub const MULTIPLIER: Value = 2024;

/// Number of decimal digits in `value`. Zero has one digit.
pub fn digit_count(value: Value) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

/// The successors of a single value.
///
/// `secondary` is `Some` only when the value split into two halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// The successor that always exists.
    pub primary: Value,
    /// The right half of a split value.
    pub secondary: Option<Value>,
}

impl Transition {
    /// A transition to a single successor.
    pub fn single(primary: Value) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// A transition that splits into two successors.
    pub fn split(left: Value, right: Value) -> Self {
        Self {
            primary: left,
            secondary: Some(right),
        }
    }

    /// Apply the rewrite rule to `value` without caching.
    ///
    /// Fails only when an odd-digit value is too large to be multiplied.
    pub fn compute(value: Value) -> Result<Self, StepError> {
        if value == 0 {
            return Ok(Self::single(1));
        }

        let digits = digit_count(value);
        if digits % 2 == 0 {
            let divisor = 10u64.pow(digits / 2);
            Ok(Self::split(value / divisor, value % divisor))
        } else {
            value
                .checked_mul(MULTIPLIER)
                .map(Self::single)
                .ok_or(StepError::ValueOverflow { value })
        }
    }

    /// Number of stones one stone becomes: 1 or 2.
    pub fn fanout(&self) -> usize {
        if self.secondary.is_some() {
            2
        } else {
            1
        }
    }

    /// The successor values in order (primary first).
    pub fn successors(&self) -> SmallVec<[Value; 2]> {
        let mut out = SmallVec::new();
        out.push(self.primary);
        if let Some(right) = self.secondary {
            out.push(right);
        }
        out
    }
}
