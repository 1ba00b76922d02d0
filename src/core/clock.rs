//! Time source abstraction.
//!
//! All duration math in the engine reads "now" through a [`Clock`], once per
//! operation, so the value shown to the user and the value committed to the
//! ledger come from the same reading.

use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current instant, in milliseconds.
pub trait Clock: fmt::Debug {
    fn now_ms(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for deterministic tests and replays.
///
/// Clones share the same reading, so a test can keep a handle while the
/// engine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    pub fn set_ms(&self, ms: i64) {
        self.now.store(ms, Ordering::SeqCst);
    }

    pub fn set_secs(&self, secs: i64) {
        self.set_ms(secs * 1000);
    }

    /// Moves the clock by `secs` (negative values move it backwards).
    pub fn advance_secs(&self, secs: i64) {
        self.now.fetch_add(secs * 1000, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Seconds elapsed between two readings, clamped at zero.
pub fn elapsed_secs(start_ms: i64, now_ms: i64) -> f64 {
    (now_ms - start_ms).max(0) as f64 / 1000.0
}
