use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("quotevault").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV-backed quotation database"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("quotevault").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_load_help() {
    let mut cmd = Command::cargo_bin("quotevault").unwrap();
    cmd.arg("load").arg("--help").assert().success().stdout(predicate::str::contains("csv"));
}
