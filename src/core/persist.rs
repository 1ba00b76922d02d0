//! Hand-off of committed ledger totals to an external store.

use crate::errors::AppResult;
use crate::models::SheetKind;
use serde::Serialize;

/// Ledger total for one key right after a commit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub job: String,
    pub sheet: SheetKind,
    pub employee: String,
    pub total_seconds: f64,
}

/// Receives snapshots after the engine transition that produced them has
/// completed. Failures never affect engine state.
pub trait SnapshotSink {
    fn persist(&mut self, snapshot: &Snapshot) -> AppResult<()>;
}

/// Sink that drops every snapshot.
#[derive(Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn persist(&mut self, _snapshot: &Snapshot) -> AppResult<()> {
        Ok(())
    }
}
