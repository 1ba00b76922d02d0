//! Accumulated (committed) seconds per (job, sheet, employee).

use crate::core::timer::{ActiveTimerRegistry, Commit};
use crate::models::TimeKey;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TimeLedger {
    entries: HashMap<TimeKey, f64>,
}

impl TimeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta_secs` to the entry for `key`, creating it on first use.
    /// Negative or non-finite deltas are clamped to zero. Returns the new total.
    pub fn commit(&mut self, key: &TimeKey, delta_secs: f64) -> f64 {
        let delta = if delta_secs.is_finite() {
            delta_secs.max(0.0)
        } else {
            0.0
        };
        let total = self.entries.entry(key.clone()).or_insert(0.0);
        *total += delta;
        *total
    }

    /// Folds a registry transition into the ledger.
    pub fn apply(&mut self, commit: &Commit) -> f64 {
        self.commit(&commit.key, commit.delta_secs)
    }

    pub fn committed(&self, key: &TimeKey) -> f64 {
        self.entries.get(key).copied().unwrap_or(0.0)
    }

    /// Committed time plus the in-progress delta when `key` is the running
    /// timer. Never writes anything back.
    pub fn live(&self, key: &TimeKey, registry: &ActiveTimerRegistry, now_ms: i64) -> f64 {
        self.committed(key) + registry.elapsed_for(key, now_ms).unwrap_or(0.0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&TimeKey, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
