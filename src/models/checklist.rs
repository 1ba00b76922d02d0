use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One line of a sheet's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    /// When checked, the whole sheet is flagged for follow-up.
    #[serde(default)]
    pub flag: bool,
}

impl ChecklistItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            flag: false,
        }
    }

    pub fn flag(id: &str, label: &str) -> Self {
        Self {
            flag: true,
            ..Self::new(id, label)
        }
    }
}

/// Checked state of the items of a single sheet, keyed by item id.
///
/// Ids are only unique within one sheet, so a `CheckState` must never be
/// shared between sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckState {
    checked: HashMap<String, bool>,
}

impl CheckState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, item_id: &str, checked: bool) {
        self.checked.insert(item_id.to_string(), checked);
    }

    /// Missing entries read as unchecked.
    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checked.get(item_id).copied().unwrap_or(false)
    }

    /// Ids currently checked, sorted.
    pub fn checked_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .checked
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for CheckState {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            checked: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
