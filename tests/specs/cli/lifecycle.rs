// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for record mutations (`new`, `edit`, `delete`) against an
//! unreachable backend: every mutation must still succeed via fallback.

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

fn new_student(temp: &TempDir, name: &str) -> String {
    let output = roster()
        .arg("new")
        .arg(name)
        .args(["--age", "20"])
        .args(["--course", "Y"])
        .args(["--grade", "A"])
        .args(["--email", "x@y.com"])
        .args(["--phone", "000"])
        .args(["-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn new_succeeds_against_unreachable_backend() {
    let temp = init_temp();
    roster()
        .arg("new")
        .arg("X")
        .args(["--age", "20"])
        .args(["--course", "Y"])
        .args(["--grade", "A"])
        .args(["--email", "x@y.com"])
        .args(["--phone", "000"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 4: X"))
        .stderr(predicate::str::contains("primary"));
}

#[test]
fn new_assigns_an_id_past_the_demo_seed() {
    let temp = init_temp();
    // Demo seeds occupy ids 1..=3, so the first fallback id is 4.
    let id = new_student(&temp, "X");
    assert_eq!(id, "4");
}

#[test]
fn new_json_echoes_the_given_fields() {
    let temp = init_temp();
    let output = roster()
        .arg("new")
        .arg("X")
        .args(["--age", "20"])
        .args(["--course", "Y"])
        .args(["--grade", "A"])
        .args(["--email", "x@y.com"])
        .args(["--phone", "000"])
        .args(["-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["name"], "X");
    assert_eq!(record["age"], 20);
    assert_eq!(record["course"], "Y");
    assert_eq!(record["grade"], "A");
    assert_eq!(record["email"], "x@y.com");
    assert_eq!(record["phone"], "000");
}

#[test]
fn new_rejects_invalid_email_with_a_hint() {
    let temp = init_temp();
    roster()
        .arg("new")
        .arg("X")
        .args(["--age", "20"])
        .args(["--course", "Y"])
        .args(["--grade", "A"])
        .args(["--email", "nope"])
        .args(["--phone", "000"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid email address"))
        .stderr(predicate::str::contains("hint"));
}

#[test]
fn new_rejects_out_of_range_age() {
    let temp = init_temp();
    roster()
        .arg("new")
        .arg("X")
        .args(["--age", "2"])
        .args(["--course", "Y"])
        .args(["--grade", "A"])
        .args(["--email", "x@y.com"])
        .args(["--phone", "000"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("age 2 out of range"));
}

#[test]
fn edit_merges_a_single_field_over_a_demo_record() {
    let temp = init_temp();
    roster()
        .arg("edit")
        .arg("1")
        .args(["--grade", "B"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1: John Doe"));
}

#[test]
fn edit_of_a_missing_record_fails() {
    let temp = init_temp();
    roster()
        .arg("edit")
        .arg("999")
        .args(["--grade", "B"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("record not found: 999"));
}

#[test]
fn delete_succeeds_against_unreachable_backend() {
    let temp = init_temp();
    roster()
        .arg("delete")
        .arg("1")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 record"));
}

#[test]
fn deleting_the_same_id_twice_still_succeeds() {
    let temp = init_temp();
    for _ in 0..2 {
        roster()
            .arg("delete")
            .arg("1")
            .current_dir(temp.path())
            .assert()
            .success();
    }
}
