use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{missing_config, qct, setup_test_db, temp_out};

fn init(db: &str, conf: &str) {
    qct()
        .args(["--db", db, "--config", conf, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
}

#[test]
fn test_init_creates_database_and_config() {
    let db = setup_test_db("cli_init");
    let conf = temp_out("cli_init", "conf");

    init(&db, &conf);

    assert!(fs::metadata(&db).is_ok());
    let yaml = fs::read_to_string(&conf).expect("config written");
    assert!(yaml.contains("housewire"));
    assert!(yaml.contains(&db));
}

#[test]
fn test_checklist_prints_items() {
    let conf = missing_config("cli_checklist");

    qct()
        .args(["--config", &conf, "checklist", "housewire"])
        .assert()
        .success()
        .stdout(contains("hw-labels"))
        .stdout(contains("hw-mismatch"))
        .stdout(contains("int-devices").not());
}

#[test]
fn test_checklist_unknown_sheet_fails() {
    let conf = missing_config("cli_checklist_bad");

    qct()
        .args(["--config", &conf, "checklist", "summary"])
        .assert()
        .failure()
        .stderr(contains("Unknown sheet"));
}

#[test]
fn test_config_check_defaults() {
    let conf = missing_config("cli_config_check");

    qct()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration OK"));
}

#[test]
fn test_config_check_rejects_duplicates() {
    let conf = temp_out("cli_config_dup", "conf");
    fs::write(
        &conf,
        "database: /tmp/dup.sqlite\nemployees:\n  - id: GW\n    name: A\n  - id: GW\n    name: B\n",
    )
    .expect("write config");

    qct()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("duplicate employee id 'GW'"));
}

#[test]
fn test_config_print() {
    let conf = missing_config("cli_config_print");

    qct()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("employees:"))
        .stdout(contains("ee-hipot"));
}

#[test]
fn test_session_from_stdin() {
    let db = setup_test_db("cli_session");
    let conf = missing_config("cli_session");

    qct()
        .args(["--db", &db, "--config", &conf, "session"])
        .write_stdin(
            "check housewire hw-labels\ncheck housewire hw-torque\ncheck housewire hw-ferrules\nstats housewire\nstart ee\nstatus\nquit\n",
        )
        .assert()
        .success()
        .stdout(contains("50%"))
        .stdout(contains("running: J1/ee/GW"))
        .stdout(contains("summary for job J1"));
}

#[test]
fn test_session_reports_unknown_keys() {
    let conf = missing_config("cli_session_unknown");

    qct()
        .args(["--config", &conf, "session", "--no-persist"])
        .write_stdin("job J404\nemp ZZ\nstatus\n")
        .assert()
        .success()
        .stderr(contains("Unknown job"))
        .stderr(contains("Unknown employee"))
        .stdout(contains("job: J1"));
}

#[test]
fn test_session_start_options() {
    let conf = missing_config("cli_session_opts");

    qct()
        .args([
            "--config",
            &conf,
            "session",
            "--no-persist",
            "--job",
            "J2",
            "--employee",
            "TG",
        ])
        .write_stdin("status\n")
        .assert()
        .success()
        .stdout(contains("job: J2"))
        .stdout(contains("employee: TG"));
}

#[test]
fn test_session_unknown_start_job_fails() {
    let conf = missing_config("cli_session_bad_job");

    qct()
        .args(["--config", &conf, "session", "--no-persist", "--job", "J404"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(contains("Unknown job"));
}

#[test]
fn test_session_export_json() {
    let conf = missing_config("cli_session_export");
    let out = temp_out("cli_session_export", "json");

    qct()
        .args(["--config", &conf, "session", "--no-persist"])
        .write_stdin(format!("export json {out}\nquit\n"))
        .assert()
        .success()
        .stdout(contains("exported 0 row(s)"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("json");
    assert!(rows.is_array());
}

#[test]
fn test_log_print_after_session() {
    let db = setup_test_db("cli_log");
    let conf = temp_out("cli_log", "conf");
    init(&db, &conf);

    qct()
        .args(["--db", &db, "--config", &conf, "session"])
        .write_stdin("start housewire\nstop\nquit\n")
        .assert()
        .success();

    qct()
        .args(["--db", &db, "--config", &conf, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("session_open"))
        .stdout(contains("session_close"));
}
