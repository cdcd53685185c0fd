//! Known inputs and their expected results.

use stones_core::{Count, Value};

/// The worked sample: two stones engraved 125 and 17.
pub const SAMPLE_STONES: [Value; 2] = [125, 17];

/// Sample input as it appears in an input file.
pub const SAMPLE_TEXT: &str = "125 17\n";

/// Stone totals for [`SAMPLE_STONES`] after rounds 1 through 6.
pub const SAMPLE_TOTALS: [Count; 6] = [3, 4, 5, 9, 13, 22];

/// Stone total for [`SAMPLE_STONES`] after 25 rounds.
pub const SAMPLE_TOTAL_25: Count = 55_312;

/// A second sample with a zero and a four-digit value, exercising the
/// `0 → 1` rule and right-half leading zeros.
pub const MIXED_STONES: [Value; 5] = [0, 1, 10, 99, 1000];

/// Stone totals for [`MIXED_STONES`] after rounds 1 through 3.
pub const MIXED_TOTALS: [Count; 3] = [8, 10, 14];

/// Stone total for [`SAMPLE_STONES`] after 75 rounds.
pub const SAMPLE_TOTAL_75: Count = 65_601_038_650_482;
