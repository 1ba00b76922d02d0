// src/export/model.rs

use crate::core::SummaryRow;
use serde::Serialize;

/// Flat summary row for export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub job: String,
    pub sheet: String,
    pub employee: String,
    pub seconds: f64,
    pub minutes: i64,
}

impl SummaryExport {
    pub fn from_row(job: &str, row: &SummaryRow) -> Self {
        Self {
            job: job.to_string(),
            sheet: row.sheet.id().to_string(),
            employee: row.employee.clone(),
            seconds: (row.seconds * 1000.0).round() / 1000.0,
            minutes: row.minutes,
        }
    }
}

/// CSV / JSON column order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["job", "sheet", "employee", "seconds", "minutes"]
}

pub(crate) fn summary_to_record(e: &SummaryExport) -> Vec<String> {
    vec![
        e.job.clone(),
        e.sheet.clone(),
        e.employee.clone(),
        format!("{:.3}", e.seconds),
        e.minutes.to_string(),
    ]
}
