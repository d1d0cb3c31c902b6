#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mailz_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("mailz"));
    cmd.env("MAILZ_HOME", home.as_os_str()).env_remove("RUST_LOG");
    cmd
}

fn generate(home: &Path) {
    mailz_cmd(home)
        .args(["new", "--no-copy", "--no-open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));
}

fn stored_emails(home: &Path) -> Vec<String> {
    let raw = fs::read_to_string(home.join("randomEmails.json")).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    records
        .iter()
        .map(|r| r["email"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_full_record_lifecycle() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    // 1. Nothing yet
    mailz_cmd(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No emails generated yet"));

    // 2. Generate two addresses
    generate(home);
    mailz_cmd(home)
        .args(["n", "--no-copy", "--no-open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@bugbug-inbox.com"));
    let emails = stored_emails(home);
    assert_eq!(emails.len(), 2);
    let (latest, first) = (&emails[0], &emails[1]);

    // 3. Listing shows both, newest first
    let output = mailz_cmd(home).args(["list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let latest_pos = stdout.find(latest.as_str()).unwrap();
    let first_pos = stdout.find(first.as_str()).unwrap();
    assert!(latest_pos < first_pos);

    // 4. Search for the first-created address, case-insensitively
    mailz_cmd(home)
        .args(["search", &first.to_uppercase()])
        .assert()
        .success()
        .stdout(predicate::str::contains(first.as_str()))
        .stdout(predicate::str::contains(latest.as_str()).not());

    // 5. Delete the newest by index
    mailz_cmd(home)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email deleted (1)"));
    assert_eq!(stored_emails(home), vec![first.clone()]);

    // 6. Clear without prompting
    mailz_cmd(home)
        .args(["clear", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All emails cleared (1)"));
    assert!(!home.join("randomEmails.json").exists());
}

#[test]
fn test_clear_declined_keeps_records() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    generate(home);

    mailz_cmd(home)
        .args(["clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));
    assert_eq!(stored_emails(home).len(), 1);
}

#[test]
fn test_corrupt_store_is_reset() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    let slot = home.join("randomEmails.json");
    fs::write(&slot, "[{\"id\": 1").unwrap();

    mailz_cmd(home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No emails generated yet"));
    assert!(!slot.exists());
}

#[test]
fn test_unknown_index_fails() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    generate(home);

    mailz_cmd(home)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    assert_eq!(stored_emails(home).len(), 1);
}

#[test]
fn test_config_set_and_show() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    mailz_cmd(home)
        .args(["config", "domain", "example.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("domain = example.test"));

    generate(home);
    mailz_cmd(home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@example.test"));

    mailz_cmd(home)
        .args(["config", "word-count", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_paths_point_into_home() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    mailz_cmd(home)
        .args(["paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("randomEmails.json"))
        .stdout(predicate::str::contains("config.json"));
}
