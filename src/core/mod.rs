pub mod catalog;
pub mod checklist;
pub mod clock;
pub mod engine;
pub mod ledger;
pub mod persist;
pub mod summary;
pub mod timer;

pub use catalog::Catalog;
pub use checklist::SheetStats;
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{ActiveTimer, QcEngine};
pub use persist::{NullSink, Snapshot, SnapshotSink};
pub use summary::SummaryRow;
