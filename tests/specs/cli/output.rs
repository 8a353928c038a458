// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `lfind --output` and the command-line surface.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::process::Command as StdCommand;
use tempfile::TempDir;

fn lfind(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("lfind");
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("LFIND_CONFIG")
        .env_remove("LFIND_NOW")
        .env_remove("RUST_LOG");
    cmd
}

fn json(args: &[&str]) -> Value {
    let home = TempDir::new().unwrap();
    let output = lfind(&home)
        .args(["--output", "json", "--now", "1000", "--"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn json_compare_leaf() {
    let value = json(&["-ost", "7"]);
    assert_eq!(value["kind"], "compare");
    assert_eq!(value["lhs"], "xattrs.ost");
    assert_eq!(value["op"], "member_of");
    assert_eq!(value["value"]["type"], "sequence");
    assert_eq!(value["value"]["value"][0]["type"], "uint64");
    assert_eq!(value["value"]["value"][0]["value"], 7);
}

#[test]
fn json_binary_fid_is_hex() {
    let value = json(&["-fid", "0x200000007:0x1:0x0"]);
    assert_eq!(value["op"], "equal");
    assert_eq!(value["value"]["type"], "binary");
    assert_eq!(
        value["value"]["value"],
        "07000000020000000100000000000000"
    );
}

#[test]
fn json_expiry_sum_operand() {
    let value = json(&["-expired"]);
    assert_eq!(value["kind"], "or");
    assert_eq!(value["right"]["lhs"]["base"], "statx.mtime.sec");
    assert_eq!(
        value["right"]["lhs"]["offset"],
        "xattrs.trusted.expiration_delay"
    );
    assert_eq!(value["right"]["value"]["type"], "int64");
    assert_eq!(value["right"]["value"]["value"], 1000);
}

#[test]
fn json_and_of_predicates() {
    let value = json(&["-hsm-state", "none", "-ost", "1"]);
    assert_eq!(value["kind"], "and");
    assert_eq!(value["left"]["lhs"], "xattrs.hsm_state");
    assert_eq!(value["right"]["lhs"], "xattrs.ost");
}

#[test]
fn json_no_predicates_is_null() {
    assert_eq!(json(&[]), Value::Null);
}

#[test]
fn unknown_output_format_is_rejected_by_clap() {
    let home = TempDir::new().unwrap();
    lfind(&home)
        .args(["--output", "yaml", "--", "-expired"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn help_lists_predicates() {
    let home = TempDir::new().unwrap();
    lfind(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-hsm-state"))
        .stdout(predicate::str::contains("-expired-at"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let home = TempDir::new().unwrap();
    lfind(&home)
        .env("RUST_LOG", "debug")
        .args(["--now", "5", "--", "-ost", "1"])
        .assert()
        .success()
        .stdout("xattrs.ost in {1}\n")
        .stderr(predicate::str::contains("translated expression"));
}

#[test]
fn closed_stdout_exits_74() {
    let home = TempDir::new().unwrap();
    let (reader, writer) = std::io::pipe().unwrap();
    drop(reader);

    let output = StdCommand::new(env!("CARGO_BIN_EXE_lfind"))
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("LFIND_CONFIG")
        .env_remove("LFIND_NOW")
        .env_remove("RUST_LOG")
        .args(["--now", "1", "--", "-expired"])
        .stdout(writer)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(74));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: io error"), "stderr: {stderr}");
}
