//! Per-job reporting rows derived from the ledger and the running timer.

use crate::core::ledger::TimeLedger;
use crate::core::timer::ActiveTimerRegistry;
use crate::models::{SheetKind, TimeKey};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub sheet: SheetKind,
    pub employee: String,
    pub seconds: f64,
    pub minutes: i64,
}

/// The single rounding rule for reported minutes.
pub fn round_minutes(secs: f64) -> i64 {
    (secs / 60.0).round() as i64
}

/// One row per (sheet, employee) of `job` with non-zero live time, ordered by
/// sheet id followed by employee id.
pub fn summarize(
    job: &str,
    ledger: &TimeLedger,
    registry: &ActiveTimerRegistry,
    now_ms: i64,
) -> Vec<SummaryRow> {
    let mut keys: Vec<&TimeKey> = ledger
        .entries()
        .filter(|(k, _)| k.job == job)
        .map(|(k, _)| k)
        .collect();

    if let Some(active) = registry.active_key()
        && active.job == job
        && !keys.contains(&active)
    {
        keys.push(active);
    }

    let mut rows: Vec<(String, SummaryRow)> = keys
        .into_iter()
        .filter_map(|key| {
            let seconds = ledger.live(key, registry, now_ms);
            (seconds > 0.0).then(|| {
                (
                    key.sort_key(),
                    SummaryRow {
                        sheet: key.sheet,
                        employee: key.employee.clone(),
                        seconds,
                        minutes: round_minutes(seconds),
                    },
                )
            })
        })
        .collect();

    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows.into_iter().map(|(_, row)| row).collect()
}
