// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `roster mode` and `roster config` commands.

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

#[test]
fn mode_defaults_to_primary() {
    let temp = init_temp();
    roster()
        .arg("mode")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("primary\n"));
}

#[test]
fn switching_announces_the_new_mode() {
    let temp = init_temp();
    roster()
        .arg("mode")
        .arg("alternate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("switched to alternate mode"));
}

#[test]
fn switching_shows_the_target_namespace_records() {
    let temp = init_temp();
    roster()
        .arg("mode")
        .arg("alternate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Brown"))
        .stdout(predicate::str::contains("John Doe").not());
}

#[test]
fn switching_persists_the_default_mode() {
    let temp = init_temp();
    roster()
        .arg("mode")
        .arg("alternate")
        .current_dir(temp.path())
        .assert()
        .success();

    // Subsequent invocations pick up the persisted mode.
    roster()
        .arg("mode")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("alternate\n"));

    roster()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Brown"));
}

#[test]
fn mode_switch_without_a_config_is_not_persisted() {
    let temp = TempDir::new().unwrap();
    roster()
        .arg("mode")
        .arg("alternate")
        .current_dir(temp.path())
        .assert()
        .success();

    // Nothing was written, so the default shows again.
    roster()
        .arg("mode")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("primary\n"));
}

#[test]
fn init_twice_fails() {
    let temp = init_temp();
    roster()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn config_shows_base_url_and_mode() {
    let temp = init_temp();
    roster()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("base-url: http://127.0.0.1:9"))
        .stdout(predicate::str::contains("mode: primary"));
}

#[test]
fn config_set_persists_the_base_url() {
    let temp = init_temp();
    roster()
        .arg("config")
        .args(["--base-url", "http://127.0.0.1:19"])
        .current_dir(temp.path())
        .assert()
        .success();

    roster()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("base-url: http://127.0.0.1:19"));
}

#[test]
fn config_set_outside_a_project_fails_with_a_hint() {
    let temp = TempDir::new().unwrap();
    roster()
        .arg("config")
        .args(["--base-url", "http://127.0.0.1:19"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("roster init"));
}
