mod common;

use common::approx;
use qctracker::core::ledger::TimeLedger;
use qctracker::core::summary::{round_minutes, summarize};
use qctracker::core::timer::ActiveTimerRegistry;
use qctracker::models::{SheetKind, TimeKey};

#[test]
fn test_summary_ordering_and_inclusion() {
    let mut ledger = TimeLedger::new();
    let mut reg = ActiveTimerRegistry::new();

    ledger.commit(&TimeKey::new("J1", SheetKind::Housewire, "GW"), 600.0);
    ledger.commit(&TimeKey::new("J1", SheetKind::Ee, "MZ"), 0.0);
    reg.start(TimeKey::new("J1", SheetKind::Integration, "TG"), 0);

    let rows = summarize("J1", &ledger, &reg, 30_000);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].sheet, SheetKind::Housewire);
    assert_eq!(rows[0].employee, "GW");
    assert_eq!(rows[0].minutes, 10);
    assert_eq!(rows[1].sheet, SheetKind::Integration);
    assert_eq!(rows[1].employee, "TG");
    assert!(rows[1].minutes == 0 || rows[1].minutes == 1);
    assert!(approx(rows[1].seconds, 30.0));
}

#[test]
fn test_summary_excludes_other_jobs() {
    let mut ledger = TimeLedger::new();
    let mut reg = ActiveTimerRegistry::new();

    ledger.commit(&TimeKey::new("J2", SheetKind::Housewire, "GW"), 300.0);
    reg.start(TimeKey::new("J2", SheetKind::Ee, "GW"), 0);

    assert!(summarize("J1", &ledger, &reg, 60_000).is_empty());
    assert_eq!(summarize("J2", &ledger, &reg, 60_000).len(), 2);
}

#[test]
fn test_summary_merges_active_with_committed() {
    let k = TimeKey::new("J1", SheetKind::Ee, "MZ");
    let mut ledger = TimeLedger::new();
    let mut reg = ActiveTimerRegistry::new();

    ledger.commit(&k, 120.0);
    reg.start(k.clone(), 0);

    let rows = summarize("J1", &ledger, &reg, 60_000);
    assert_eq!(rows.len(), 1);
    assert!(approx(rows[0].seconds, 180.0));
    assert_eq!(rows[0].minutes, 3);
}

#[test]
fn test_summary_is_deterministic() {
    let mut ledger = TimeLedger::new();
    let reg = ActiveTimerRegistry::new();
    for (sheet, emp, secs) in [
        (SheetKind::Integration, "MZ", 61.0),
        (SheetKind::Ee, "TG", 59.0),
        (SheetKind::Housewire, "TG", 1.0),
        (SheetKind::Housewire, "GW", 3600.0),
    ] {
        ledger.commit(&TimeKey::new("J1", sheet, emp), secs);
    }

    let first = summarize("J1", &ledger, &reg, 0);
    let second = summarize("J1", &ledger, &reg, 0);
    assert_eq!(first, second);

    let order: Vec<(SheetKind, &str)> = first
        .iter()
        .map(|r| (r.sheet, r.employee.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (SheetKind::Ee, "TG"),
            (SheetKind::Housewire, "GW"),
            (SheetKind::Housewire, "TG"),
            (SheetKind::Integration, "MZ"),
        ]
    );
}

#[test]
fn test_round_minutes() {
    assert_eq!(round_minutes(0.0), 0);
    assert_eq!(round_minutes(29.0), 0);
    assert_eq!(round_minutes(89.0), 1);
    assert_eq!(round_minutes(90.0), 2);
    assert_eq!(round_minutes(600.0), 10);
}
