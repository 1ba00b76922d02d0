#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use qctracker::config::Config;
use qctracker::core::{Catalog, ManualClock, QcEngine, Snapshot, SnapshotSink};
use qctracker::errors::AppResult;
use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

pub fn qct() -> Command {
    cargo_bin_cmd!("qctracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_qctracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Config path that does not exist, so the built-in defaults are used
pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_qctracker.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Engine over the built-in catalog, driven by a manual clock starting at t=0
pub fn engine_at_zero() -> (QcEngine, ManualClock) {
    let clock = ManualClock::new(0);
    let catalog = Catalog::from_config(&Config::default()).expect("default catalog");
    let engine = QcEngine::new(catalog, Box::new(clock.clone()));
    (engine, clock)
}

/// Sink whose snapshots stay observable after it is boxed into a runner
#[derive(Clone, Default)]
pub struct SharedSink {
    pub snapshots: Rc<RefCell<Vec<Snapshot>>>,
}

impl SnapshotSink for SharedSink {
    fn persist(&mut self, snapshot: &Snapshot) -> AppResult<()> {
        self.snapshots.borrow_mut().push(snapshot.clone());
        Ok(())
    }
}

/// Float comparison for ledger seconds
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
