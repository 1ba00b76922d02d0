pub mod checklist;
pub mod job;
pub mod sheet;
pub mod time_key;

pub use checklist::{CheckState, ChecklistItem};
pub use job::{Employee, Job};
pub use sheet::SheetKind;
pub use time_key::TimeKey;
