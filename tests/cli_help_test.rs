//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("nbstore")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NoneBot Plugin Store CLI"))
        .stdout(predicate::str::contains("--registry"))
        .stdout(predicate::str::contains("--locale"));
}

#[test]
fn test_browse_help() {
    Command::cargo_bin("nbstore")
        .unwrap()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse the plugin store interactively"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("nbstore")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--tag"))
        .stdout(predicate::str::contains("--official"))
        .stdout(predicate::str::contains("updated"));
}

#[test]
fn test_info_help() {
    Command::cargo_bin("nbstore")
        .unwrap()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module name or PyPI project name"));
}

#[test]
fn test_publish_help() {
    Command::cargo_bin("nbstore")
        .unwrap()
        .args(["publish", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pypi"))
        .stdout(predicate::str::contains("--module"));
}

#[test]
fn test_invalid_locale_is_rejected() {
    Command::cargo_bin("nbstore")
        .unwrap()
        .args(["--locale", "fr", "list"])
        .assert()
        .failure();
}
