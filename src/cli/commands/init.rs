use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode unless `--config` is given)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::init_all(cli.db.clone(), config_path.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing qctracker…");
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // internal log, non blocking
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 qctracker initialization completed!");
    Ok(())
}
