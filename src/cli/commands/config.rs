use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SheetKind;
use crate::ui::messages::{error, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if let Err(e) = cfg.validate() {
                error(&e);
                return Err(e);
            }

            let items: usize = SheetKind::ALL
                .iter()
                .map(|s| cfg.checklists.get(*s).len())
                .sum();
            success(format!(
                "Configuration OK: {} job(s), {} employee(s), {} checklist item(s)",
                cfg.jobs.len(),
                cfg.employees.len(),
                items
            ));
        }
    }

    Ok(())
}
