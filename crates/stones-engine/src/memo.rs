//! Memoized transition lookup.
//!
//! [`TransitionEngine`] owns the memo store: a map from each value seen so
//! far to its [`Transition`]. Entries are inserted on first lookup and never
//! changed or removed, so the store only grows. Distinct values stay few
//! (thousands, even after many rounds) while stone counts grow
//! exponentially, which is what makes the cache pay off.

use std::collections::HashMap;

use stones_core::{StepError, Transition, Value};

/// Lookup counters since the engine was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the memo store.
    pub hits: u64,
    /// Lookups that computed and inserted a new entry.
    pub misses: u64,
}

/// Computes transitions and caches them per value.
///
/// Each instance has its own store; nothing is process-global, so
/// independent engines (e.g. in parallel tests) never interact.
#[derive(Debug, Default)]
pub struct TransitionEngine {
    memo: HashMap<Value, Transition>,
    stats: MemoStats,
}

impl TransitionEngine {
    /// Create an engine with an empty memo store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine whose memo store can hold `capacity` entries
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            memo: HashMap::with_capacity(capacity),
            stats: MemoStats::default(),
        }
    }

    /// Return the transition for `value`, computing and caching it if unseen.
    ///
    /// A value outside the supported domain returns
    /// [`StepError::ValueOverflow`] and is not cached.
    pub fn get_transition(&mut self, value: Value) -> Result<Transition, StepError> {
        if let Some(&t) = self.memo.get(&value) {
            self.stats.hits += 1;
            return Ok(t);
        }
        let t = Transition::compute(value)?;
        self.memo.insert(value, t);
        self.stats.misses += 1;
        Ok(t)
    }

    /// Whether `value` already has a memo entry.
    pub fn is_memoized(&self, value: Value) -> bool {
        self.memo.contains_key(&value)
    }

    /// Number of distinct values in the memo store.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Hit and miss counters since creation.
    pub fn memo_stats(&self) -> MemoStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_engine_is_empty() {
        let engine = TransitionEngine::new();
        assert_eq!(engine.memo_len(), 0);
        assert_eq!(engine.memo_stats(), MemoStats::default());
    }

    #[test]
    fn first_lookup_misses_then_hits() {
        let mut engine = TransitionEngine::with_capacity(16);
        assert_eq!(engine.get_transition(17), Ok(Transition::split(1, 7)));
        assert!(engine.is_memoized(17));
        assert_eq!(engine.memo_len(), 1);

        assert_eq!(engine.get_transition(17), Ok(Transition::split(1, 7)));
        assert_eq!(engine.memo_len(), 1);
        assert_eq!(engine.memo_stats(), MemoStats { hits: 1, misses: 1 });
    }

    #[test]
    fn overflow_is_not_cached() {
        let mut engine = TransitionEngine::new();
        let value = 1_000_000_000_000_000_000;
        assert_eq!(
            engine.get_transition(value),
            Err(StepError::ValueOverflow { value })
        );
        assert!(!engine.is_memoized(value));
        assert_eq!(engine.memo_len(), 0);
    }

    proptest! {
        #[test]
        fn cached_result_matches_uncached(value in 0u64..1_000_000_000_000) {
            let mut engine = TransitionEngine::new();
            let first = engine.get_transition(value).unwrap();
            let len = engine.memo_len();
            let second = engine.get_transition(value).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(engine.memo_len(), len);
            prop_assert_eq!(Transition::compute(value).unwrap(), first);
        }
    }
}
