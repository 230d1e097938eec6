use assert_cmd::Command;
use predicates::prelude::*;

fn taskdeck() -> Command {
    Command::cargo_bin("taskdeck").unwrap()
}

#[test]
fn test_help_describes_the_client() {
    taskdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A terminal client for the task reminder server",
        ))
        .stdout(predicate::str::contains("--server"));
}

#[test]
fn test_version_prints() {
    taskdeck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskdeck"));
}

#[test]
fn test_completions_generate() {
    taskdeck()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taskdeck"));
}

#[test]
fn test_unknown_subcommand_fails() {
    taskdeck().arg("frobnicate").assert().failure();
}
