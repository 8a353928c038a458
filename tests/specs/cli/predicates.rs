// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for translating predicates with the `lfind` binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

/// `lfind` isolated from the user's config and environment.
fn lfind(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("lfind");
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("LFIND_CONFIG")
        .env_remove("LFIND_NOW")
        .env_remove("RUST_LOG");
    cmd
}

fn translate(args: &[&str]) -> String {
    let home = TempDir::new().unwrap();
    let output = lfind(&home)
        .args(["--now", "1000", "--"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "lfind {args:?} failed");
    String::from_utf8(output.stdout).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// -ost
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn ost_scalar() {
    assert_eq!(translate(&["-ost", "3"]), "xattrs.ost in {3}\n");
}

#[test]
fn ost_range_set() {
    assert_eq!(
        translate(&["-ost", "[1,2-5]"]),
        "(xattrs.ost in {1} || (xattrs.ost >= 2 && xattrs.ost <= 5))\n"
    );
}

#[test]
fn ost_reversed_range_is_kept() {
    assert_eq!(
        translate(&["-ost", "[5-2]"]),
        "(xattrs.ost >= 5 && xattrs.ost <= 2)\n"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// -hsm-state / -fid
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    none = { "none", "xattrs.hsm_state == 0" },
    released = { "released", "xattrs.hsm_state & 4" },
    lost = { "lost", "xattrs.hsm_state & 64" },
)]
fn hsm_state(state: &str, expected: &str) {
    assert_eq!(translate(&["-hsm-state", state]), format!("{expected}\n"));
}

#[test]
fn fid_is_compared_as_lu_fid_bytes() {
    assert_eq!(
        translate(&["-fid", "[0x200000007:0x1:0x0]"]),
        "xattrs.fid == 0x07000000020000000100000000000000\n"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// -expired / -expired-at
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn expired_uses_now_flag() {
    let text = translate(&["-expired"]);
    assert!(text.contains("xattrs.trusted.expiration_date <= 1000"));
    assert!(text.contains("statx.atime.sec + xattrs.trusted.expiration_delay <= 1000"));
    assert!(text.contains("statx.ctime.sec + xattrs.trusted.expiration_delay <= 1000"));
    assert!(text.contains("statx.mtime.sec + xattrs.trusted.expiration_delay <= 1000"));
}

#[test]
fn expired_uses_now_env() {
    let home = TempDir::new().unwrap();
    lfind(&home)
        .env("LFIND_NOW", "2000")
        .args(["--", "-expired"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<= 2000"));
}

#[test]
fn now_flag_overrides_env() {
    let home = TempDir::new().unwrap();
    lfind(&home)
        .env("LFIND_NOW", "2000")
        .args(["--now", "3000", "--", "-expired"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<= 3000"))
        .stdout(predicate::str::contains("2000").not());
}

#[test]
fn expired_at_uses_literal() {
    let text = translate(&["-expired-at", "42"]);
    assert!(text.contains("<= 42"));
    assert!(!text.contains("1000"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Expressions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn predicates_are_anded_in_order() {
    assert_eq!(
        translate(&["-ost", "1", "-hsm-state", "dirty"]),
        "(xattrs.ost in {1} && xattrs.hsm_state & 2)\n"
    );
}

#[test]
fn no_predicates_prints_nothing() {
    assert_eq!(translate(&[]), "");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    empty_range_set = { &["-ost", "[]"], "empty range set" },
    trailing_comma = { &["-ost", "[1,]"], "[1,]" },
    signed_ost = { &["-ost", "+5"], "+5" },
    out_of_range = { &["-ost", "[4294967296]"], "4294967296" },
    unknown_state = { &["-hsm-state", "bogus"], "bogus" },
    bad_fid = { &["-fid", "0x1:0x2"], "0x1:0x2" },
    bad_epoch = { &["-expired-at", "tomorrow"], "tomorrow" },
    unknown_predicate = { &["-size", "3"], "-size" },
    missing_argument = { &["-ost"], "-ost" },
)]
fn usage_errors_exit_64(args: &[&str], mention: &str) {
    let home = TempDir::new().unwrap();
    lfind(&home)
        .args(["--now", "1000", "--"])
        .args(args)
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains(mention));
}

#[test]
fn invalid_now_env_exits_64() {
    let home = TempDir::new().unwrap();
    lfind(&home)
        .env("LFIND_NOW", "soon")
        .args(["--", "-expired"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("'soon'"));
}
