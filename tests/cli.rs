use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shield_cmd(log: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hero-shield").unwrap();
    cmd.env_remove("HERO_SHIELD_CONFIG")
        .env_remove("HERO_SHIELD_PASSWORD")
        .env_remove("HERO_SHIELD_ADMIN_PASSWORD")
        .arg("--log")
        .arg(log);
    cmd
}

#[test]
fn check_exits_zero_when_allowed() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("security_log.csv");

    shield_cmd(&log)
        .args(["check", "A hero who flies and saves cats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALLOWED"));

    assert!(!log.exists());
}

#[test]
fn check_exits_two_when_rejected() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("security_log.csv");

    shield_cmd(&log)
        .args(["check", "I", "want", "Batman"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("That hero already exists"));

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("COPYRIGHT_ATTEMPT,I want Batman"));
}

#[test]
fn drill_reports_active_shield_for_banned_word() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("security_log.csv");

    shield_cmd(&log)
        .args(["drill", "idiot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SHIELD ACTIVE"));
}

#[test]
fn drill_hints_when_word_is_allowed() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("security_log.csv");

    shield_cmd(&log)
        .args(["drill", "cape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Try a banned word."));
}

#[test]
fn review_of_empty_log() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("security_log.csv");

    shield_cmd(&log)
        .env("HERO_SHIELD_ADMIN_PASSWORD", "cape-and-cowl")
        .args(["review", "--password", "cape-and-cowl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No security events logged."));
}

#[test]
fn review_rejects_wrong_password() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("security_log.csv");
    shield_cmd(&log).args(["check", "shut up"]).assert().code(2);

    shield_cmd(&log)
        .env("HERO_SHIELD_ADMIN_PASSWORD", "cape-and-cowl")
        .args(["review", "--password", "guess"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("shut up").not())
        .stderr(predicate::str::contains("access denied"));
}

#[test]
fn expected_password_cannot_be_passed_as_a_flag() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("security_log.csv");
    shield_cmd(&log).args(["check", "I want Batman"]).assert().code(2);

    shield_cmd(&log)
        .env("HERO_SHIELD_ADMIN_PASSWORD", "cape-and-cowl")
        .args(["review", "--password", "guess", "--admin-password", "guess"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Batman").not());
}

#[test]
fn review_password_from_environment() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("security_log.csv");
    shield_cmd(&log).args(["check", "call 555-123-4567"]).assert().code(2);

    shield_cmd(&log)
        .env("HERO_SHIELD_ADMIN_PASSWORD", "cape-and-cowl")
        .env("HERO_SHIELD_PASSWORD", "cape-and-cowl")
        .arg("review")
        .assert()
        .success()
        .stdout(predicate::str::contains("PII_ATTEMPT"))
        .stdout(predicate::str::contains("call 555-123-4567"));
}
