//! Binary smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_endpoints_and_variables() {
    Command::cargo_bin("name-forge")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("POST /generate-names"))
        .stdout(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_short_help_flag() {
    Command::cargo_bin("name-forge")
        .unwrap()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}
