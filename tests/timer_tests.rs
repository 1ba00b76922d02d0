mod common;

use common::approx;
use qctracker::core::clock::{Clock, ManualClock, elapsed_secs};
use qctracker::core::ledger::TimeLedger;
use qctracker::core::timer::{ActiveTimerRegistry, TimerState};
use qctracker::models::{SheetKind, TimeKey};

fn key(sheet: SheetKind, emp: &str) -> TimeKey {
    TimeKey::new("J1", sheet, emp)
}

#[test]
fn test_registry_starts_idle() {
    let reg = ActiveTimerRegistry::new();
    assert_eq!(reg.state(), &TimerState::Idle);
    assert!(reg.active_key().is_none());
}

#[test]
fn test_single_active_timer() {
    let a = key(SheetKind::Housewire, "GW");
    let b = key(SheetKind::Integration, "TG");
    let mut reg = ActiveTimerRegistry::new();
    let mut ledger = TimeLedger::new();

    assert!(reg.start(a.clone(), 0).is_none());
    let commit = reg.start(b.clone(), 30_000).expect("previous timer committed");
    ledger.apply(&commit);

    assert!(!reg.is_running(&a));
    assert!(reg.is_running(&b));
    assert_eq!(commit.key, a);
    assert!(approx(ledger.committed(&a), 30.0));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_restart_same_key_resets_start() {
    let a = key(SheetKind::Housewire, "GW");
    let mut reg = ActiveTimerRegistry::new();
    let mut ledger = TimeLedger::new();

    reg.start(a.clone(), 0);
    let commit = reg.start(a.clone(), 10_000).expect("restart commits");
    ledger.apply(&commit);

    assert!(reg.is_running(&a));
    assert!(approx(ledger.committed(&a), 10.0));
    assert!(approx(ledger.live(&a, &reg, 15_000), 15.0));
}

#[test]
fn test_stop_when_idle_is_noop() {
    let mut reg = ActiveTimerRegistry::new();
    assert!(reg.stop(1_000).is_none());
    assert_eq!(reg.state(), &TimerState::Idle);
}

#[test]
fn test_commit_on_stop() {
    let a = key(SheetKind::Ee, "MZ");
    let mut reg = ActiveTimerRegistry::new();
    let mut ledger = TimeLedger::new();

    reg.start(a.clone(), 0);
    if let Some(c) = reg.stop(125_000) {
        ledger.apply(&c);
    }
    assert!(approx(ledger.committed(&a), 125.0));

    if let Some(c) = reg.stop(500_000) {
        ledger.apply(&c);
    }
    assert!(approx(ledger.committed(&a), 125.0));
}

#[test]
fn test_live_polling_does_not_accumulate() {
    let a = key(SheetKind::Housewire, "GW");
    let mut reg = ActiveTimerRegistry::new();
    let ledger = TimeLedger::new();

    reg.start(a.clone(), 0);
    for _ in 0..3 {
        assert!(approx(ledger.live(&a, &reg, 90_000), 90.0));
    }
    assert!(approx(ledger.committed(&a), 0.0));
}

#[test]
fn test_live_ignores_other_keys_timer() {
    let a = key(SheetKind::Housewire, "GW");
    let b = key(SheetKind::Housewire, "MZ");
    let mut reg = ActiveTimerRegistry::new();
    let mut ledger = TimeLedger::new();

    ledger.commit(&a, 20.0);
    reg.start(b, 0);
    assert!(approx(ledger.live(&a, &reg, 60_000), 20.0));
}

#[test]
fn test_backwards_clock_clamps_to_zero() {
    let a = key(SheetKind::Integration, "TG");
    let mut reg = ActiveTimerRegistry::new();
    let mut ledger = TimeLedger::new();

    ledger.commit(&a, 5.0);
    reg.start(a.clone(), 100_000);
    assert!(approx(ledger.live(&a, &reg, 50_000), 5.0));

    let c = reg.stop(50_000).expect("running");
    assert!(approx(c.delta_secs, 0.0));
    ledger.apply(&c);
    assert!(approx(ledger.committed(&a), 5.0));
}

#[test]
fn test_ledger_clamps_bad_deltas() {
    let a = key(SheetKind::Ee, "GW");
    let mut ledger = TimeLedger::new();

    assert!(approx(ledger.commit(&a, 12.5), 12.5));
    assert!(approx(ledger.commit(&a, -3.0), 12.5));
    assert!(approx(ledger.commit(&a, f64::NAN), 12.5));
    assert!(approx(ledger.committed(&key(SheetKind::Ee, "TG")), 0.0));
}

#[test]
fn test_manual_clock_clones_share_reading() {
    let clock = ManualClock::new(0);
    let handle = clock.clone();

    handle.set_secs(10);
    assert_eq!(clock.now_ms(), 10_000);

    handle.advance_secs(-4);
    assert_eq!(clock.now_ms(), 6_000);
}

#[test]
fn test_elapsed_secs_never_negative() {
    assert!(approx(elapsed_secs(1_000, 2_500), 1.5));
    assert!(approx(elapsed_secs(5_000, 1_000), 0.0));
}
