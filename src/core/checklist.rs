use crate::models::{CheckState, ChecklistItem};
use serde::Serialize;

/// Derived completion state of one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetStats {
    pub percent: u8,
    pub flagged: bool,
    pub checked: usize,
    pub total: usize,
}

/// Completion percentage and flag status for one sheet.
///
/// Only ids present in `items` count; stray ids in `checked` are ignored.
pub fn stats(items: &[ChecklistItem], checked: &CheckState) -> SheetStats {
    let total = items.len();
    let done = items.iter().filter(|i| checked.is_checked(&i.id)).count();
    let flagged = items.iter().any(|i| i.flag && checked.is_checked(&i.id));

    SheetStats {
        percent: percent(done, total),
        flagged,
        checked: done,
        total,
    }
}

/// `round(100 * done / total)` with halves rounded up, 0 when `total == 0`.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total);
    ((200 * done + total) / (2 * total)) as u8
}
