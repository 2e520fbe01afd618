// Integration tests for the psidash CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the psidash binary.
fn psidash() -> Command {
    Command::cargo_bin("psidash").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    psidash()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("psidash"));
}

#[test]
fn cli_help_flag() {
    psidash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulated PageSpeed Insights scores"));
}

#[test]
fn analyze_requires_url() {
    psidash()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn domain_normalizes_mobile_alias() {
    psidash()
        .args(["domain", "http://m.flipkart.com/abc"])
        .assert()
        .success()
        .stdout("flipkart\n");
}

#[test]
fn domain_strips_www_and_lowercases() {
    psidash()
        .args(["domain", "https://WWW.Example.ORG/path?q=1"])
        .assert()
        .success()
        .stdout("example.org\n");
}

#[test]
fn domain_rejects_invalid_url() {
    psidash()
        .args(["domain", "not a url"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn derive_overlay_is_pure_function_of_score() {
    psidash()
        .args(["derive", "overlay", "--score", "95"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"overlay\""))
        .stdout(predicate::str::contains("\"base_intensity\": 0.25"))
        .stdout(predicate::str::contains("\"region\": \"hero\""));
}

#[test]
fn derive_accepts_out_of_range_scores() {
    psidash()
        .args(["derive", "breakdown", "--score", "-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base\": 100.0"));
}

#[test]
fn derive_rejects_unknown_kind() {
    psidash()
        .args(["derive", "heatmap", "--score", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
