use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SheetKind;
use crate::ui::messages::header;
use crate::utils::colors::{RED, RESET};
use crate::utils::table::{Column, Table};

/// Handle the `checklist` subcommand: print item definitions per sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checklist { sheet } = cmd {
        let sheets = match sheet {
            Some(s) => vec![SheetKind::parse(s)?],
            None => SheetKind::ALL.to_vec(),
        };

        let sep = cfg.separator_char.chars().next().unwrap_or('-');

        for sheet in sheets {
            header(format!("{} ({})", sheet.label(), sheet.id()));

            let mut table = Table::new(vec![
                Column::new("#"),
                Column::new("ID"),
                Column::new("LABEL"),
                Column::new("FLAG"),
            ])
            .with_separator(sep);

            for (i, item) in cfg.checklists.get(sheet).iter().enumerate() {
                let flag = if item.flag {
                    format!("{RED}flag{RESET}")
                } else {
                    String::new()
                };
                table.add_row(vec![
                    (i + 1).to_string(),
                    item.id.clone(),
                    item.label.clone(),
                    flag,
                ]);
            }

            println!("{}", table.render());
        }
    }

    Ok(())
}
