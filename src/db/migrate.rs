use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Check whether a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `time_snapshots` table: latest committed total per session key.
fn create_snapshots_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_snapshots (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id    TEXT NOT NULL,
            job           TEXT NOT NULL,
            sheet         TEXT NOT NULL CHECK(sheet IN ('housewire','integration','ee')),
            employee      TEXT NOT NULL,
            total_seconds REAL NOT NULL DEFAULT 0 CHECK(total_seconds >= 0),
            updated_at    TEXT NOT NULL,
            UNIQUE(session_id, job, sheet, employee)
        );

        CREATE INDEX IF NOT EXISTS idx_snapshots_session ON time_snapshots(session_id);
        "#,
    )?;
    Ok(())
}

/// Bring the schema up to date. Safe to run on every start.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    if !table_exists(conn, "time_snapshots")? {
        create_snapshots_table(conn).map_err(|e| AppError::Migration(e.to_string()))?;
        ttlog(
            conn,
            "migration_applied",
            "time_snapshots",
            "Created time_snapshots table",
        )?;
        success("Created 'time_snapshots' table.");
    }

    Ok(())
}
