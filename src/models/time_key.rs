use super::sheet::SheetKind;
use serde::Serialize;
use std::fmt;

/// Identity of a time ledger entry: (job, sheet, employee).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TimeKey {
    pub job: String,
    pub sheet: SheetKind,
    pub employee: String,
}

impl TimeKey {
    pub fn new(job: &str, sheet: SheetKind, employee: &str) -> Self {
        Self {
            job: job.to_string(),
            sheet,
            employee: employee.to_string(),
        }
    }

    /// Ordering key used by the summary view: sheet id followed by employee id.
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.sheet.id(), self.employee)
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.job, self.sheet, self.employee)
    }
}
