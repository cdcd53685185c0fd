//! Value → count tables.
//!
//! [`Histogram`] is backed by an [`IndexMap`] so iteration follows
//! insertion order. Results never depend on that order, but it makes two
//! runs over the same input iterate (and log) identically.

use indexmap::map::Entry;
use indexmap::IndexMap;

use stones_core::{Count, StepError, Value};

/// Number of stones holding each value.
///
/// Zero counts are never stored: adding zero is a no-op, so every key
/// present has at least one stone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: IndexMap<Value, Count>,
}

impl Histogram {
    /// An empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty histogram with room for `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: IndexMap::with_capacity(capacity),
        }
    }

    /// Add `count` stones of `value`, merging with any existing entry.
    ///
    /// Returns [`StepError::CountOverflow`] if the merged count does not
    /// fit; the entry is left unchanged in that case.
    pub fn add(&mut self, value: Value, count: Count) -> Result<(), StepError> {
        if count == 0 {
            return Ok(());
        }
        match self.counts.entry(value) {
            Entry::Occupied(mut e) => {
                let merged = e
                    .get()
                    .checked_add(count)
                    .ok_or(StepError::CountOverflow { value })?;
                *e.get_mut() = merged;
            }
            Entry::Vacant(e) => {
                e.insert(count);
            }
        }
        Ok(())
    }

    /// Build a histogram from `(value, count)` pairs, merging repeated
    /// values with [`Histogram::add`].
    pub fn try_from_counts(
        entries: impl IntoIterator<Item = (Value, Count)>,
    ) -> Result<Self, StepError> {
        let mut h = Histogram::new();
        for (value, count) in entries {
            h.add(value, count)?;
        }
        Ok(h)
    }

    /// Count of stones holding `value` (zero if absent).
    pub fn get(&self, value: Value) -> Count {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the histogram holds no stones.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of stones.
    ///
    /// Checked: returns [`StepError::CountOverflow`] naming the entry at
    /// which the running sum overflowed.
    pub fn total(&self) -> Result<Count, StepError> {
        self.counts.iter().try_fold(Count::MIN, |acc, (&value, &count)| {
            acc.checked_add(count)
                .ok_or(StepError::CountOverflow { value })
        })
    }

    /// Iterate `(value, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Value, Count)> + '_ {
        self.counts.iter().map(|(&v, &c)| (v, c))
    }

    /// Entries sorted ascending by value.
    pub fn sorted(&self) -> Vec<(Value, Count)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(v, _)| v);
        entries
    }
}

/// Tally individual stone values.
impl FromIterator<Value> for Histogram {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut h = Histogram::new();
        for value in iter {
            *h.counts.entry(value).or_insert(0) += 1;
        }
        h
    }
}
