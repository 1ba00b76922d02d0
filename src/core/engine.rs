//! Facade used by the UI layer: checklist toggles, the single stopwatch and
//! the per-job summary.
//!
//! Every operation is synchronous and takes `&mut self` (or `&self` for
//! reads), so a query can never observe a stopped timer whose elapsed time
//! has not been committed yet. Each operation reads the clock at most once.

use crate::core::catalog::Catalog;
use crate::core::checklist::{self, SheetStats};
use crate::core::clock::Clock;
use crate::core::ledger::TimeLedger;
use crate::core::persist::Snapshot;
use crate::core::summary::{self, SummaryRow};
use crate::core::timer::{ActiveTimerRegistry, Commit};
use crate::errors::AppResult;
use crate::models::{CheckState, SheetKind, TimeKey};
use std::collections::HashMap;

/// The running timer as seen by a UI: its key and current live seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTimer {
    pub key: TimeKey,
    pub live_seconds: f64,
}

#[derive(Debug)]
pub struct QcEngine {
    catalog: Catalog,
    clock: Box<dyn Clock>,
    job: String,
    employee: String,
    checks: HashMap<String, HashMap<SheetKind, CheckState>>,
    registry: ActiveTimerRegistry,
    ledger: TimeLedger,
    outbox: Vec<Snapshot>,
}

impl QcEngine {
    pub fn new(catalog: Catalog, clock: Box<dyn Clock>) -> Self {
        let job = catalog.default_job().to_string();
        let employee = catalog.default_employee().to_string();
        Self {
            catalog,
            clock,
            job,
            employee,
            checks: HashMap::new(),
            registry: ActiveTimerRegistry::new(),
            ledger: TimeLedger::new(),
            outbox: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_job(&self) -> &str {
        &self.job
    }

    pub fn current_employee(&self) -> &str {
        &self.employee
    }

    fn key(&self, sheet: SheetKind) -> TimeKey {
        TimeKey::new(&self.job, sheet, &self.employee)
    }

    fn record(&mut self, commit: Commit) -> f64 {
        let total = self.ledger.apply(&commit);
        self.outbox.push(Snapshot {
            job: commit.key.job,
            sheet: commit.key.sheet,
            employee: commit.key.employee,
            total_seconds: total,
        });
        total
    }

    // ---------------------------
    // Checklist
    // ---------------------------

    /// Sets one item of `sheet` for the current job and returns the new stats.
    pub fn toggle_item(
        &mut self,
        sheet: SheetKind,
        item_id: &str,
        checked: bool,
    ) -> AppResult<SheetStats> {
        self.catalog.item(sheet, item_id)?;
        if let Some(sheets) = self.checks.get_mut(self.job.as_str()) {
            sheets.entry(sheet).or_default().set(item_id, checked);
        } else {
            let mut state = CheckState::new();
            state.set(item_id, checked);
            self.checks.insert(self.job.clone(), HashMap::from([(sheet, state)]));
        }
        Ok(self.sheet_stats(sheet))
    }

    pub fn sheet_stats(&self, sheet: SheetKind) -> SheetStats {
        let empty = CheckState::new();
        let state = self.check_state(sheet).unwrap_or(&empty);
        checklist::stats(self.catalog.items(sheet), state)
    }

    fn check_state(&self, sheet: SheetKind) -> Option<&CheckState> {
        self.checks.get(self.job.as_str())?.get(&sheet)
    }

    pub fn checked_items(&self, sheet: SheetKind) -> Vec<String> {
        self.check_state(sheet)
            .map(|s| s.checked_ids().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    // ---------------------------
    // Timer
    // ---------------------------

    /// Starts the stopwatch for `sheet` under the current job and employee,
    /// committing whatever timer was running before.
    pub fn start_timer(&mut self, sheet: SheetKind) {
        let now = self.clock.now_ms();
        let key = self.key(sheet);
        if let Some(previous) = self.registry.start(key, now) {
            self.record(previous);
        }
    }

    /// Stops the running timer and returns the committed total for its key.
    /// Returns `None` when nothing was running.
    pub fn stop_timer(&mut self) -> Option<f64> {
        let now = self.clock.now_ms();
        self.registry.stop(now).map(|c| self.record(c))
    }

    pub fn is_running(&self, sheet: SheetKind) -> bool {
        self.registry.is_running(&self.key(sheet))
    }

    pub fn active(&self) -> Option<ActiveTimer> {
        let now = self.clock.now_ms();
        self.registry.active_key().map(|key| ActiveTimer {
            key: key.clone(),
            live_seconds: self.ledger.live(key, &self.registry, now),
        })
    }

    // ---------------------------
    // Context
    // ---------------------------

    /// Switches the current job. A running timer is committed first so no
    /// time is attributed to the new job.
    pub fn set_job(&mut self, id: &str) -> AppResult<()> {
        self.catalog.job(id)?;
        self.stop_timer();
        self.job = id.to_string();
        Ok(())
    }

    /// Switches the current employee, committing a running timer first.
    pub fn set_employee(&mut self, id: &str) -> AppResult<()> {
        self.catalog.employee(id)?;
        self.stop_timer();
        self.employee = id.to_string();
        Ok(())
    }

    // ---------------------------
    // Queries
    // ---------------------------

    pub fn committed_seconds(&self, sheet: SheetKind) -> f64 {
        self.ledger.committed(&self.key(sheet))
    }

    pub fn live_seconds(&self, sheet: SheetKind) -> f64 {
        let now = self.clock.now_ms();
        self.ledger.live(&self.key(sheet), &self.registry, now)
    }

    /// Summary rows for the current job.
    pub fn summary(&self) -> Vec<SummaryRow> {
        let now = self.clock.now_ms();
        summary::summarize(&self.job, &self.ledger, &self.registry, now)
    }

    /// Summary rows for any configured job.
    pub fn summary_for(&self, job: &str) -> AppResult<Vec<SummaryRow>> {
        self.catalog.job(job)?;
        let now = self.clock.now_ms();
        Ok(summary::summarize(job, &self.ledger, &self.registry, now))
    }

    pub fn ledger(&self) -> &TimeLedger {
        &self.ledger
    }

    /// Takes the snapshots produced since the last drain, oldest first.
    pub fn drain_snapshots(&mut self) -> Vec<Snapshot> {
        std::mem::take(&mut self.outbox)
    }
}
