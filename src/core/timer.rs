//! Single running timer, modelled as an explicit Idle / Running state machine.

use crate::core::clock::elapsed_secs;
use crate::models::TimeKey;

#[derive(Debug, Clone, PartialEq)]
pub enum TimerState {
    Idle,
    Running { key: TimeKey, start_ms: i64 },
}

/// Elapsed time released by a Running → Idle transition, to be folded into
/// the ledger by the caller in the same operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub key: TimeKey,
    pub delta_secs: f64,
}

/// Holds at most one running timer across all jobs, sheets and employees.
#[derive(Debug, Clone)]
pub struct ActiveTimerRegistry {
    state: TimerState,
}

impl Default for ActiveTimerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveTimerRegistry {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Starts a timer for `key` at `now_ms`.
    ///
    /// A running timer is stopped first, even when it belongs to the same key,
    /// so restarting resets the start instant.
    pub fn start(&mut self, key: TimeKey, now_ms: i64) -> Option<Commit> {
        let previous = self.stop(now_ms);
        self.state = TimerState::Running {
            key,
            start_ms: now_ms,
        };
        previous
    }

    /// Running → Idle. No-op when already idle.
    pub fn stop(&mut self, now_ms: i64) -> Option<Commit> {
        match std::mem::replace(&mut self.state, TimerState::Idle) {
            TimerState::Idle => None,
            TimerState::Running { key, start_ms } => Some(Commit {
                key,
                delta_secs: elapsed_secs(start_ms, now_ms),
            }),
        }
    }

    pub fn is_running(&self, key: &TimeKey) -> bool {
        matches!(&self.state, TimerState::Running { key: k, .. } if k == key)
    }

    pub fn active_key(&self) -> Option<&TimeKey> {
        match &self.state {
            TimerState::Idle => None,
            TimerState::Running { key, .. } => Some(key),
        }
    }

    /// In-progress seconds for `key`, or `None` if `key` is not the running timer.
    pub fn elapsed_for(&self, key: &TimeKey, now_ms: i64) -> Option<f64> {
        match &self.state {
            TimerState::Running { key: k, start_ms } if k == key => {
                Some(elapsed_secs(*start_ms, now_ms))
            }
            _ => None,
        }
    }
}
