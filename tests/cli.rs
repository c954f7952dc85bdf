use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;
use tempfile::TempDir;

// `dirstore` with no args should exit with a non-zero return code
#[test]
fn cli_no_args() {
    Command::cargo_bin("dirstore").unwrap().assert().failure();
}

#[test]
fn cli_add_then_get() {
    let temp_dir = TempDir::new().unwrap();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["add", "alice", "alice@example.com"])
        .current_dir(&temp_dir)
        .assert()
        .success();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["get", "alice"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(contains("alice@example.com"));
}

#[test]
fn cli_duplicate_add_fails() {
    let temp_dir = TempDir::new().unwrap();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["add", "alice", "alice@example.com"])
        .current_dir(&temp_dir)
        .assert()
        .success();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["add", "alice", "dup@example.com"])
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stderr(contains("User already exists"));
    // original value survives the failed duplicate add
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["get", "alice"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(contains("alice@example.com"));
}

#[test]
fn cli_get_missing_user() {
    let temp_dir = TempDir::new().unwrap();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["get", "nobody"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(contains("User not found"));
}

#[test]
fn cli_rm_missing_user_fails() {
    let temp_dir = TempDir::new().unwrap();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["rm", "nobody"])
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stderr(contains("User not found"));
}

#[test]
fn cli_rm_then_list() {
    let temp_dir = TempDir::new().unwrap();
    for (username, email) in [("alice", "alice@example.com"), ("bob", "bob@example.com")] {
        Command::cargo_bin("dirstore")
            .unwrap()
            .args(["add", username, email])
            .current_dir(&temp_dir)
            .assert()
            .success();
    }
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["rm", "alice"])
        .current_dir(&temp_dir)
        .assert()
        .success();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["list"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(contains("bob").and(contains("alice").not()));
}

#[test]
fn cli_explicit_file_flag() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("directory.json");
    let path = path.to_str().unwrap();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["add", "alice", "alice@example.com", "--file", path])
        .assert()
        .success();
    Command::cargo_bin("dirstore")
        .unwrap()
        .args(["list", "--file", path])
        .assert()
        .success()
        .stdout(contains("alice"));
}
