mod common;

use common::temp_out;
use qctracker::config::Config;
use qctracker::core::Catalog;
use qctracker::errors::AppError;
use qctracker::models::{ChecklistItem, Job, SheetKind};
use std::fs;
use std::path::Path;

#[test]
fn test_defaults_are_valid() {
    let cfg = Config::default();
    cfg.validate().expect("defaults validate");

    assert_eq!(cfg.checklists.get(SheetKind::Housewire).len(), 6);
    let flags = cfg
        .checklists
        .get(SheetKind::Housewire)
        .iter()
        .filter(|i| i.flag)
        .count();
    assert_eq!(flags, 1);
}

#[test]
fn test_duplicate_item_in_sheet_is_rejected() {
    let mut cfg = Config::default();
    cfg.checklists
        .ee
        .push(ChecklistItem::new("ee-hipot", "Duplicate"));

    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, AppError::Config(msg) if msg.contains("ee-hipot")));
}

#[test]
fn test_same_item_id_on_two_sheets_is_allowed() {
    let mut cfg = Config::default();
    cfg.checklists
        .integration
        .push(ChecklistItem::new("hw-labels", "Shared id"));

    cfg.validate().expect("ids only need to be unique per sheet");
}

#[test]
fn test_duplicate_job_is_rejected() {
    let mut cfg = Config::default();
    cfg.jobs.push(Job::new("J1", "Again"));
    assert!(cfg.validate().is_err());
}

#[test]
fn test_empty_employees_is_rejected() {
    let mut cfg = Config::default();
    cfg.employees.clear();
    assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
}

#[test]
fn test_unknown_default_job_is_rejected() {
    let cfg = Config {
        default_job: Some("J404".into()),
        ..Config::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, AppError::UnknownKey { kind: "job", .. }));
    assert!(Catalog::from_config(&cfg).is_err());
}

#[test]
fn test_catalog_uses_configured_defaults() {
    let cfg = Config {
        default_job: Some("J3".into()),
        default_employee: Some("TG".into()),
        ..Config::default()
    };
    let catalog = Catalog::from_config(&cfg).expect("valid");
    assert_eq!(catalog.default_job(), "J3");
    assert_eq!(catalog.default_employee(), "TG");
    assert!(catalog.item(SheetKind::Ee, "ee-retest").expect("exists").flag);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let path = temp_out("config_missing", "conf");
    let cfg = Config::load_from(Path::new(&path)).expect("defaults");
    assert_eq!(cfg.jobs.len(), 3);
    assert_eq!(cfg.employees.len(), 3);
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let path = temp_out("config_partial", "conf");
    fs::write(
        &path,
        "database: /tmp/partial.sqlite\njobs:\n  - id: P1\n    label: Pump skid\n",
    )
    .expect("write config");

    let cfg = Config::load_from(Path::new(&path)).expect("parse");
    assert_eq!(cfg.database, "/tmp/partial.sqlite");
    assert_eq!(cfg.jobs, vec![Job::new("P1", "Pump skid")]);
    assert_eq!(cfg.employees.len(), 3);
    assert_eq!(cfg.checklists.get(SheetKind::Integration).len(), 5);
    assert_eq!(cfg.separator_char, "-");
}

#[test]
fn test_saved_config_loads_back() {
    let path = temp_out("config_saved", "conf");
    let mut cfg = Config::default();
    cfg.default_employee = Some("MZ".into());
    cfg.checklists.ee = vec![ChecklistItem::flag("only", "Only item")];
    cfg.save_to(Path::new(&path)).expect("save");

    let loaded = Config::load_from(Path::new(&path)).expect("load");
    assert_eq!(loaded.default_employee.as_deref(), Some("MZ"));
    assert_eq!(loaded.checklists, cfg.checklists);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let path = temp_out("config_invalid", "conf");
    fs::write(&path, "jobs: [unterminated").expect("write config");
    assert!(Config::load_from(Path::new(&path)).is_err());
}
