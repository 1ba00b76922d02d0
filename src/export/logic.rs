// src/export/logic.rs

use crate::core::SummaryRow;
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::SummaryExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of the time summary.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the summary rows of `job` to `file`.
    ///
    /// Returns the number of rows written. An empty summary still produces a
    /// file (header only for CSV, `[]` for JSON).
    pub fn export_summary(
        format: ExportFormat,
        file: &str,
        job: &str,
        rows: &[SummaryRow],
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        let records: Vec<SummaryExport> = rows
            .iter()
            .map(|r| SummaryExport::from_row(job, r))
            .collect();

        if records.is_empty() {
            warning(format!("No tracked time for job {job}."));
        }

        match format {
            ExportFormat::Csv => write_csv(&path, &records)?,
            ExportFormat::Json => write_json(&path, &records)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(records.len())
    }
}
