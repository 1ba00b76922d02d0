use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::ansi::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "session_open" => Colour::Green,
        "session_close" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// Handle the `log` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        print_log(&pool)?;
    }

    Ok(())
}

fn print_log(pool: &DbPool) -> AppResult<()> {
    let entries = load_log(&pool.conn)?;

    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return Ok(());
    }

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

    println!("📜 Internal log:\n");

    for e in &entries {
        let colored_op = color_for_operation(&e.operation).paint(e.operation.as_str());
        let mut op_target = colored_op.to_string();
        if !e.target.is_empty() {
            op_target.push_str(&format!(" ({})", e.target));
        }

        let visible = strip_ansi(&op_target);
        let op_target = if visible.chars().count() > MAX_OP_WIDTH {
            let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            op_target
        };

        let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(strip_ansi(&op_target).chars().count()));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            e.date,
            op_target,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
