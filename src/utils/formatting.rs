//! Formatting utilities used for CLI and export outputs.

/// Minutes as `HHh MMm` (or `HH:MM` when `short`).
pub fn mins2readable(mins: i64, short: bool) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Live seconds as `HHh MMm SSs`; fractions are truncated.
pub fn secs2readable(secs: f64) -> String {
    let total = secs.max(0.0).floor() as i64;
    format!(
        "{:02}h {:02}m {:02}s",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Completion bar like `[#####.....]` for a 0..=100 percentage.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
