use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("formdeck");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("formdeck"));
}

#[test]
fn rejects_unreadable_definition_files() {
    let mut cmd = cargo::cargo_bin_cmd!("formdeck");
    cmd.args(["--load", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(contains("failed to load"));
}
