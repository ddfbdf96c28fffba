use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_usage() {
    cargo_bin_cmd!("nikanor")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MESSAGE"))
        .stdout(predicate::str::contains("ART_PATH"))
        .stdout(predicate::str::contains("--delay-ms"));
}

#[test]
fn test_short_help_exits_zero_without_bubble() {
    cargo_bin_cmd!("nikanor")
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("|  ").not());
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("nikanor")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_too_many_arguments_fails_with_usage() {
    cargo_bin_cmd!("nikanor")
        .args(["hello", "art.txt", "extra"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("extra"));
}
