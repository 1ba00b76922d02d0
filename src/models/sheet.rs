use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Checklist sheets that carry completion and time state.
///
/// The summary tab is a derived view over these and is intentionally not a
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
    Housewire,
    Integration,
    Ee,
}

impl SheetKind {
    pub const ALL: [SheetKind; 3] = [SheetKind::Housewire, SheetKind::Integration, SheetKind::Ee];

    pub fn id(&self) -> &'static str {
        match self {
            SheetKind::Housewire => "housewire",
            SheetKind::Integration => "integration",
            SheetKind::Ee => "ee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SheetKind::Housewire => "Housewire",
            SheetKind::Integration => "Integration",
            SheetKind::Ee => "EE",
        }
    }

    /// Parse a sheet id from user input (case-insensitive).
    pub fn from_id(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "housewire" | "hw" => Some(SheetKind::Housewire),
            "integration" | "int" => Some(SheetKind::Integration),
            "ee" => Some(SheetKind::Ee),
            _ => None,
        }
    }

    /// Like [`SheetKind::from_id`] but fails with `UnknownKey`.
    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_id(s).ok_or_else(|| AppError::unknown("sheet", s))
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
