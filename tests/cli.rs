//! CLI binary tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("makehub")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mcp"))
        .stdout(predicate::str::contains("scenarios"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("logs"));
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("makehub")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("makehub"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("makehub")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}

#[test]
fn run_requires_scenario_id() {
    Command::cargo_bin("makehub")
        .unwrap()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario_id").or(predicate::str::contains("SCENARIO_ID")));
}

#[test]
fn run_rejects_invalid_data_json() {
    // Argument parsing fails before any network I/O
    Command::cargo_bin("makehub")
        .unwrap()
        .args(["run", "123", "--data", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn run_rejects_non_object_data() {
    Command::cargo_bin("makehub")
        .unwrap()
        .args(["run", "123", "--data", "[1, 2, 3]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON object"));
}
