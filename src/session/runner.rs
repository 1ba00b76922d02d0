//! Applies session commands to a [`QcEngine`] and renders the results.

use crate::core::{QcEngine, SnapshotSink};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::SheetKind;
use crate::session::command::{HELP, SessionCommand};
use crate::ui::messages::{error, warning};
use crate::utils::colors::{
    RESET, color_for_percent, colorize_flag, colorize_optional, colorize_running,
};
use crate::utils::formatting::{mins2readable, progress_bar, secs2readable};
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct SessionRunner<W: Write> {
    engine: QcEngine,
    sink: Box<dyn SnapshotSink>,
    out: W,
    tick: Duration,
    separator: char,
}

impl<W: Write> SessionRunner<W> {
    pub fn new(engine: QcEngine, sink: Box<dyn SnapshotSink>, out: W) -> Self {
        Self {
            engine,
            sink,
            out,
            tick: Duration::from_secs(1),
            separator: '-',
        }
    }

    /// Interval between `watch` re-reads.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn engine(&self) -> &QcEngine {
        &self.engine
    }

    pub fn into_parts(self) -> (QcEngine, W) {
        (self.engine, self.out)
    }

    /// Read commands until `quit` or end of input, then close the session.
    ///
    /// Command errors are reported and the session continues. A failed read
    /// ends the loop; the session is still closed before the error returns.
    pub fn run<R: BufRead>(&mut self, input: R) -> AppResult<()> {
        let mut read_error = None;

        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    read_error = Some(e);
                    break;
                }
            };
            let flow = match SessionCommand::parse(&line) {
                Ok(Some(cmd)) => match self.execute(&cmd) {
                    Ok(flow) => flow,
                    Err(e) => {
                        error(&e);
                        Flow::Continue
                    }
                },
                Ok(None) => Flow::Continue,
                Err(e) => {
                    error(&e);
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.finish()?;

        match read_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Apply one command, then hand any committed totals to the sink.
    pub fn execute(&mut self, cmd: &SessionCommand) -> AppResult<Flow> {
        let result = self.apply(cmd);
        self.flush_snapshots();
        result
    }

    fn apply(&mut self, cmd: &SessionCommand) -> AppResult<Flow> {
        match cmd {
            SessionCommand::Job(id) => {
                self.engine.set_job(id)?;
                let label = self.engine.catalog().job(id)?.label.clone();
                writeln!(self.out, "job: {id} ({label})")?;
            }
            SessionCommand::Employee(id) => {
                self.engine.set_employee(id)?;
                let name = self.engine.catalog().employee(id)?.name.clone();
                writeln!(self.out, "employee: {id} ({name})")?;
            }
            SessionCommand::Check {
                sheet,
                item,
                checked,
            } => {
                let stats = self.engine.toggle_item(*sheet, item, *checked)?;
                let mark = if *checked { "x" } else { " " };
                writeln!(
                    self.out,
                    "[{mark}] {sheet}:{item} -> {}{}%{RESET} {}",
                    color_for_percent(stats.percent),
                    stats.percent,
                    colorize_flag(stats.flagged)
                )?;
            }
            SessionCommand::Start(sheet) => {
                self.engine.start_timer(*sheet);
                writeln!(
                    self.out,
                    "timer started: {}/{}/{}",
                    self.engine.current_job(),
                    sheet,
                    self.engine.current_employee()
                )?;
            }
            SessionCommand::Stop => match self.engine.stop_timer() {
                Some(total) => writeln!(self.out, "timer stopped: total {}", secs2readable(total))?,
                None => writeln!(self.out, "no timer running")?,
            },
            SessionCommand::Stats(Some(sheet)) => self.print_stats(&[*sheet])?,
            SessionCommand::Stats(None) => self.print_stats(&SheetKind::ALL)?,
            SessionCommand::Live(sheet) => {
                let secs = self.engine.live_seconds(*sheet);
                writeln!(self.out, "{sheet}: {}", secs2readable(secs))?;
            }
            SessionCommand::Summary => self.print_summary()?,
            SessionCommand::Status => self.print_status()?,
            SessionCommand::Watch { sheet, ticks } => {
                for _ in 0..*ticks {
                    thread::sleep(self.tick);
                    let secs = self.engine.live_seconds(*sheet);
                    writeln!(self.out, "{sheet}: {}", secs2readable(secs))?;
                    self.out.flush()?;
                }
            }
            SessionCommand::Export {
                format,
                file,
                force,
            } => {
                let rows = self.engine.summary();
                let job = self.engine.current_job().to_string();
                let n = ExportLogic::export_summary(*format, file, &job, &rows, *force)?;
                writeln!(self.out, "exported {n} row(s) to {file}")?;
            }
            SessionCommand::Help => writeln!(self.out, "{HELP}")?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Stop any running timer, persist its total and print the final summary.
    pub fn finish(&mut self) -> AppResult<()> {
        let stopped = self.engine.stop_timer();
        self.flush_snapshots();

        if let Some(total) = stopped {
            writeln!(self.out, "timer stopped: total {}", secs2readable(total))?;
        }
        self.print_summary()?;
        self.out.flush()?;
        Ok(())
    }

    fn flush_snapshots(&mut self) {
        for snapshot in self.engine.drain_snapshots() {
            if let Err(e) = self.sink.persist(&snapshot) {
                warning(format!(
                    "Failed to persist {}/{}/{}: {}",
                    snapshot.job, snapshot.sheet, snapshot.employee, e
                ));
            }
        }
    }

    fn print_stats(&mut self, sheets: &[SheetKind]) -> AppResult<()> {
        let mut table = Table::new(vec![
            Column::new("SHEET"),
            Column::new("DONE"),
            Column::new("PROGRESS"),
            Column::new("%"),
            Column::new("STATUS"),
            Column::new("TIME"),
        ])
        .with_separator(self.separator);

        for sheet in sheets {
            let stats = self.engine.sheet_stats(*sheet);
            let time = secs2readable(self.engine.live_seconds(*sheet));
            let time = colorize_running(&colorize_optional(&time), self.engine.is_running(*sheet));
            table.add_row(vec![
                sheet.label().to_string(),
                format!("{}/{}", stats.checked, stats.total),
                progress_bar(stats.percent, 10),
                format!(
                    "{}{}%{RESET}",
                    color_for_percent(stats.percent),
                    stats.percent
                ),
                colorize_flag(stats.flagged),
                time,
            ]);
        }

        write!(self.out, "{}", table.render())?;
        Ok(())
    }

    fn print_summary(&mut self) -> AppResult<()> {
        let job = self.engine.current_job().to_string();
        let rows = self.engine.summary();

        writeln!(self.out, "summary for job {job}:")?;
        if rows.is_empty() {
            writeln!(self.out, "  (no tracked time)")?;
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("SHEET"),
            Column::new("EMPLOYEE"),
            Column::new("MINUTES"),
            Column::new("TIME"),
        ])
        .with_separator(self.separator);

        for row in &rows {
            table.add_row(vec![
                row.sheet.id().to_string(),
                row.employee.clone(),
                row.minutes.to_string(),
                mins2readable(row.minutes, false),
            ]);
        }

        write!(self.out, "{}", table.render())?;
        Ok(())
    }

    fn print_status(&mut self) -> AppResult<()> {
        writeln!(self.out, "job: {}", self.engine.current_job())?;
        writeln!(self.out, "employee: {}", self.engine.current_employee())?;
        match self.engine.active() {
            Some(active) => writeln!(
                self.out,
                "running: {} ({})",
                active.key,
                secs2readable(active.live_seconds)
            )?,
            None => writeln!(self.out, "running: none")?,
        }
        Ok(())
    }
}
