use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::SheetKind;

pub const HELP: &str = "\
Commands:
  job <id>                       switch job (stops the running timer)
  employee|emp <id>              switch employee (stops the running timer)
  check <sheet> <item>           mark an item as done
  uncheck <sheet> <item>         clear an item
  start <sheet>                  start the stopwatch for a sheet
  stop                           stop the stopwatch
  stats [sheet]                  completion and flag status
  live <sheet>                   live time for a sheet
  summary                        time per sheet and employee for the job
  status                         current job, employee and running timer
  watch <sheet> <ticks>          re-read live time once per tick
  export <csv|json> <file> [--force]
  help
  quit|exit";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Job(String),
    Employee(String),
    Check {
        sheet: SheetKind,
        item: String,
        checked: bool,
    },
    Start(SheetKind),
    Stop,
    Stats(Option<SheetKind>),
    Live(SheetKind),
    Summary,
    Status,
    Watch {
        sheet: SheetKind,
        ticks: u32,
    },
    Export {
        format: ExportFormat,
        file: String,
        force: bool,
    },
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let cmd = match (verb.as_str(), args.as_slice()) {
            ("job", [id]) => SessionCommand::Job(id.to_string()),
            ("employee" | "emp", [id]) => SessionCommand::Employee(id.to_string()),
            ("check", [sheet, item]) => SessionCommand::Check {
                sheet: SheetKind::parse(sheet)?,
                item: item.to_string(),
                checked: true,
            },
            ("uncheck", [sheet, item]) => SessionCommand::Check {
                sheet: SheetKind::parse(sheet)?,
                item: item.to_string(),
                checked: false,
            },
            ("start", [sheet]) => SessionCommand::Start(SheetKind::parse(sheet)?),
            ("stop", []) => SessionCommand::Stop,
            ("stats", []) => SessionCommand::Stats(None),
            ("stats", [sheet]) => SessionCommand::Stats(Some(SheetKind::parse(sheet)?)),
            ("live", [sheet]) => SessionCommand::Live(SheetKind::parse(sheet)?),
            ("summary", []) => SessionCommand::Summary,
            ("status", []) => SessionCommand::Status,
            ("watch", [sheet, ticks]) => SessionCommand::Watch {
                sheet: SheetKind::parse(sheet)?,
                ticks: ticks
                    .parse()
                    .map_err(|_| AppError::InvalidCommand(format!("invalid tick count '{ticks}'")))?,
            },
            ("export", [format, file]) => SessionCommand::Export {
                format: ExportFormat::parse(format)?,
                file: file.to_string(),
                force: false,
            },
            ("export", [format, file, "--force"]) => SessionCommand::Export {
                format: ExportFormat::parse(format)?,
                file: file.to_string(),
                force: true,
            },
            ("help" | "?", []) => SessionCommand::Help,
            ("quit" | "exit", []) => SessionCommand::Quit,
            _ => return Err(AppError::InvalidCommand(line.to_string())),
        };

        Ok(Some(cmd))
    }
}
