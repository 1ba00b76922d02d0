use crate::errors::AppResult;
use crate::export::model::SummaryExport;
use std::path::Path;

/// Write summary rows as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, rows: &[SummaryExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
