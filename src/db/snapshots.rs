//! SQLite-backed [`SnapshotSink`]: keeps the latest committed total for each
//! (session, job, sheet, employee). Rows are written for external consumers
//! and are never read back into an engine.

use crate::core::persist::{Snapshot, SnapshotSink};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::SheetKind;
use chrono::Local;
use rusqlite::params;

pub struct SqliteSink {
    pool: DbPool,
    session_id: String,
}

impl SqliteSink {
    pub fn new(pool: DbPool, session_id: &str) -> Self {
        Self {
            pool,
            session_id: session_id.to_string(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Snapshots stored for this session, ordered by job, sheet and employee.
    pub fn stored(&self) -> AppResult<Vec<Snapshot>> {
        let mut stmt = self.pool.conn.prepare_cached(
            "SELECT job, sheet, employee, total_seconds FROM time_snapshots
             WHERE session_id = ?1 ORDER BY job, sheet, employee",
        )?;

        let rows = stmt.query_map([&self.session_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (job, sheet, employee, total_seconds) = r?;
            let sheet = SheetKind::parse(&sheet)?;
            out.push(Snapshot {
                job,
                sheet,
                employee,
                total_seconds,
            });
        }
        Ok(out)
    }
}

impl SnapshotSink for SqliteSink {
    fn persist(&mut self, snapshot: &Snapshot) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO time_snapshots (session_id, job, sheet, employee, total_seconds, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(session_id, job, sheet, employee)
             DO UPDATE SET total_seconds = excluded.total_seconds,
                           updated_at    = excluded.updated_at",
        )?;

        stmt.execute(params![
            self.session_id,
            snapshot.job,
            snapshot.sheet.id(),
            snapshot.employee,
            snapshot.total_seconds,
            now
        ])?;
        Ok(())
    }
}
