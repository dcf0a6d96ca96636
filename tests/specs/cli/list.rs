// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `roster list` command.
//!
//! Every spec points the config at an unreachable port, so the binary
//! exercises the fallback path deterministically.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster() -> Command {
    cargo_bin_cmd!("roster")
}

/// A temp project whose backend address never answers.
fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    roster()
        .arg("init")
        .arg("--base-url")
        .arg("http://127.0.0.1:9")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

#[test]
fn list_without_backend_shows_primary_demo_data() {
    let temp = init_temp();
    roster()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Students (3)"))
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Jane Smith"))
        .stdout(predicate::str::contains("Mike Johnson"));
}

#[test]
fn list_warns_about_demo_data_on_stderr() {
    let temp = init_temp();
    roster()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("demo data"))
        .stderr(predicate::str::contains("primary"));
}

#[test]
fn list_alternate_mode_shows_the_other_seed_set() {
    let temp = init_temp();
    roster()
        .arg("list")
        .arg("-m")
        .arg("alternate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Brown"))
        .stdout(predicate::str::contains("Bob Wilson"))
        .stdout(predicate::str::contains("John Doe").not());
}

#[test]
fn list_json_output_parses_as_a_record_array() {
    let temp = init_temp();
    let output = roster()
        .arg("list")
        .arg("-o")
        .arg("json")
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(records.as_array().unwrap().len(), 3);
    assert_eq!(records[0]["name"], "John Doe");
}

#[test]
fn list_id_output_is_one_id_per_line() {
    let temp = init_temp();
    let output = roster()
        .arg("list")
        .arg("-o")
        .arg("id")
        .current_dir(temp.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "1\n2\n3");
}

#[test]
fn list_rejects_unknown_mode_label() {
    let temp = init_temp();
    roster()
        .arg("list")
        .arg("-m")
        .arg("c_structures")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid storage mode"));
}

#[test]
fn list_works_without_any_config() {
    // No .roster/ anywhere up the tree of a fresh temp dir; the
    // compiled-in defaults apply and fallback still renders records.
    let temp = TempDir::new().unwrap();
    roster()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Students (3)"));
}
