use crate::errors::AppResult;
use crate::export::model::{SummaryExport, get_headers, summary_to_record};
use csv::Writer;
use std::path::Path;

/// Write summary rows as CSV.
pub(crate) fn write_csv(path: &Path, rows: &[SummaryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(summary_to_record(row))?;
    }

    wtr.flush()?;
    Ok(())
}
