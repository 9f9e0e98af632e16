//! CLI Integration Tests
//!
//! Exercise the `--check` path end to end: argument parsing, content and
//! settings validation, and the summary output. No window is opened.

use assert_cmd::Command;
use predicates::prelude::*;

fn portfolio_cmd() -> Command {
    Command::cargo_bin("portfolio").expect("Failed to find portfolio binary")
}

#[test]
fn test_check_prints_summary() {
    portfolio_cmd()
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio content OK: Santanu Pradhan"))
        .stdout(predicate::str::contains(
            "Sections:       about, skills, projects, certifications, contact",
        ))
        .stdout(predicate::str::contains("Skills:         12"))
        .stdout(predicate::str::contains("Resume:         yes"));
}

#[test]
fn test_check_json_summary() {
    let output = portfolio_cmd()
        .args(["--check", "--json"])
        .output()
        .expect("Failed to run portfolio");
    assert!(output.status.success());

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(summary["name"], "Santanu Pradhan");
    assert_eq!(summary["skills"], 12);
    assert_eq!(summary["projects"], 3);
    assert_eq!(summary["certifications"], 2);
    assert_eq!(summary["roles"], 3);
    assert_eq!(summary["resume"], true);
}

#[test]
fn test_json_requires_check() {
    portfolio_cmd().arg("--json").assert().failure();
}

#[test]
fn test_zero_typing_interval_rejected() {
    portfolio_cmd()
        .args(["--check", "--typing-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid motion settings"));
}

#[test]
fn test_too_many_particles_rejected() {
    portfolio_cmd()
        .args(["--check", "--particles", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("particle_count"));
}
