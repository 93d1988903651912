//! CLI surface checks.

use assert_cmd::Command;
use predicates::prelude::*;

fn reviewbot() -> Command {
    let mut cmd = Command::cargo_bin("reviewbot").expect("binary builds");
    // Make sure ambient credentials never leak into these tests.
    cmd.env_remove("PRACTICUM_TOKEN")
        .env_remove("TELEGRAM_TOKEN")
        .env_remove("TELEGRAM_CHAT_ID");
    cmd
}

#[test]
fn help_lists_subcommands() {
    reviewbot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_config_fails_without_credentials() {
    reviewbot()
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PRACTICUM_TOKEN"));
}

#[test]
fn check_config_reports_masked_credentials() {
    reviewbot()
        .args(["check", "config"])
        .env("PRACTICUM_TOKEN", "practicum-token-0123456789")
        .env("TELEGRAM_TOKEN", "telegram-token-0123456789")
        .env("TELEGRAM_CHAT_ID", "12345")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration valid"))
        .stdout(predicate::str::contains("12345"))
        .stdout(predicate::str::contains("practicum-token-0123456789").not());
}

#[test]
fn check_config_rejects_non_numeric_chat_id() {
    reviewbot()
        .args(["check", "config"])
        .env("PRACTICUM_TOKEN", "practicum-token")
        .env("TELEGRAM_TOKEN", "telegram-token")
        .env("TELEGRAM_CHAT_ID", "not-a-number")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TELEGRAM_CHAT_ID"));
}
