use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Catalog, NullSink, QcEngine, SnapshotSink, SystemClock};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::snapshots::SqliteSink;
use crate::errors::AppResult;
use crate::session::SessionRunner;
use crate::ui::messages::{info, warning};
use chrono::Local;
use std::io;

/// Handle the `session` subcommand: drive the engine from stdin.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session {
        job,
        employee,
        no_persist,
    } = cmd
    {
        let catalog = Catalog::from_config(cfg)?;
        let mut engine = QcEngine::new(catalog, Box::new(SystemClock));
        if let Some(id) = job {
            engine.set_job(id)?;
        }
        if let Some(id) = employee {
            engine.set_employee(id)?;
        }

        let session_id = Local::now().format("%Y%m%dT%H%M%S%.3f").to_string();

        // Separate connection for the internal log; the sink owns its own.
        let log_pool = if *no_persist {
            None
        } else {
            let pool = DbPool::new(&cfg.database)?;
            init_db(&pool.conn)?;
            Some(pool)
        };

        let sink: Box<dyn SnapshotSink> = if *no_persist {
            Box::new(NullSink)
        } else {
            Box::new(SqliteSink::new(DbPool::new(&cfg.database)?, &session_id))
        };

        if let Some(pool) = &log_pool {
            let message = format!(
                "job {} / employee {}",
                engine.current_job(),
                engine.current_employee()
            );
            log_nonblocking(pool, "session_open", &session_id, &message);
        }

        info(format!(
            "Session {session_id} (job {}, employee {}). Type 'help' for commands.",
            engine.current_job(),
            engine.current_employee()
        ));

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let stdin = io::stdin();
        let mut runner = SessionRunner::new(engine, sink, io::stdout()).with_separator(sep);
        let result = runner.run(stdin.lock());

        if let Some(pool) = &log_pool {
            let keys = runner.engine().ledger().len();
            let message = format!("{keys} time entr(ies) committed");
            log_nonblocking(pool, "session_close", &session_id, &message);
        }

        result?;
    }

    Ok(())
}

fn log_nonblocking(pool: &DbPool, operation: &str, session_id: &str, message: &str) {
    if let Err(e) = ttlog(&pool.conn, operation, session_id, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
