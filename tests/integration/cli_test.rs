//! Integration tests for the qss CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use crate::helpers::TestEnv;

fn qss(env: &TestEnv) -> Command {
    Command::from_std(env.command())
}

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["--help"]);

    assert_eq!(exit_code, 0);
    for sub in ["play", "trace", "config", "completions"] {
        assert!(stdout.contains(sub), "missing {} in help", sub);
    }
}

#[test]
fn missing_subcommand_is_usage_error() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

#[test]
fn unknown_format_is_usage_error() {
    let env = TestEnv::new();
    qss(&env)
        .args(["trace", "--format", "yaml", "1", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn version_flag_prints_version() {
    let env = TestEnv::new();
    qss(&env)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("qss {}", env!("CARGO_PKG_VERSION"))));
}

// ============================================================================
// trace
// ============================================================================

#[test]
fn trace_text_output() {
    let env = TestEnv::new();
    let (stdout, stderr, exit_code) = env.run(&["trace", "2", "1"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout, @r"
    Input: [2, 1] (6 steps)
    #0   init           [2, 1]
         Starting quick sort (divide and conquer).
    #1   pivot-selected [2, 1] pivot=1 range=0..=1
         Pivot set to 1 (last element of the range).
    #2   range-start    [2, 1] i=-1 pivot=1 range=0..=1
         Comparing indices 0 through 0 against the pivot.
    #3   compare        [2, 1] idx=[0] i=-1 pivot=1 range=0..=1
         Compare 2 with pivot 1.
    #4   partition-done [1, 2] idx=[0] pivot=0 range=0..=1
         Finally, pivot 1 goes to index 0; this partition is done.
    #5   complete       [1, 2] idx=[0, 1]
         Every partition is finished. The array is sorted!
    ");
}

#[test]
fn trace_json_is_a_full_document() {
    let env = TestEnv::new();
    let output = qss(&env)
        .args(["trace", "--format", "json", "5", "2", "8", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["locale"], "en");
    assert_eq!(doc["input"], serde_json::json!([5, 2, 8, 1]));
    assert_eq!(doc["listing"].as_array().unwrap().len(), 14);
    assert!(doc["generatedAt"].as_str().is_some());

    let steps = doc["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 14);
    assert_eq!(steps[0]["stepKind"], "init");
    assert_eq!(steps[1]["stepKind"], "pivot-selected");
    assert_eq!(steps[1]["pivotIndex"], 3);
    assert_eq!(steps[1]["activeRange"], serde_json::json!({"low": 0, "high": 3}));
    assert_eq!(steps[2]["boundary"], -1);
    assert_eq!(steps[13]["stepKind"], "complete");
    assert_eq!(steps[13]["array"], serde_json::json!([1, 2, 5, 8]));
}

#[test]
fn trace_accepts_negative_values() {
    let env = TestEnv::new();
    qss(&env)
        .args(["trace", "3", "-7", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete       [-7, 0, 3]"));
}

#[test]
fn trace_japanese_locale() {
    let env = TestEnv::new();
    qss(&env)
        .args(["trace", "--locale", "ja", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ピボット"));
}

#[test]
fn seeded_random_trace_is_reproducible() {
    let env = TestEnv::new();
    let args = ["trace", "--seed", "42", "--size", "8", "--format", "json"];

    let run = || -> Value {
        let out = qss(&env).args(args).output().unwrap();
        assert!(out.status.success());
        serde_json::from_slice(&out.stdout).unwrap()
    };
    let first = run();
    let second = run();

    assert_eq!(first["input"], second["input"]);
    assert_eq!(first["steps"], second["steps"]);
    assert_eq!(first["input"].as_array().unwrap().len(), 8);
}

#[test]
fn random_values_respect_configured_range() {
    let env = TestEnv::with_config("[input]\narray_size = 20\nmin_value = 10\nmax_value = 12\n");
    let out = qss(&env)
        .args(["trace", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let doc: Value = serde_json::from_slice(&out.stdout).unwrap();
    let input = doc["input"].as_array().unwrap();
    assert_eq!(input.len(), 20);
    assert!(input.iter().all(|v| (10..=12).contains(&v.as_i64().unwrap())));
}

#[test]
fn zero_size_is_rejected() {
    let env = TestEnv::new();
    qss(&env)
        .args(["trace", "--size", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--size must be between 1 and 64"));
}

#[test]
fn too_many_explicit_values_are_rejected() {
    let env = TestEnv::new();
    let values: Vec<String> = (1..=65).map(|v| v.to_string()).collect();
    qss(&env)
        .arg("trace")
        .args(&values)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at most 64 values can be sorted, got 65"));
}

#[test]
fn sixty_four_explicit_values_are_accepted() {
    let env = TestEnv::new();
    let values: Vec<String> = (1..=64).rev().map(|v| v.to_string()).collect();
    qss(&env)
        .args(["trace", "--format", "json"])
        .args(&values)
        .assert()
        .success();
}

#[test]
fn closed_stdout_ends_trace_quietly() {
    use std::io::{BufRead, BufReader};
    use std::process::Stdio;

    let env = TestEnv::new();
    // Sorted input is the slowest case: far more output than a pipe buffers.
    let values: Vec<String> = (1..=64).map(|v| v.to_string()).collect();
    let mut child = env
        .command()
        .arg("trace")
        .args(&values)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn qss");

    let stdout = child.stdout.take().unwrap();
    let mut first = String::new();
    BufReader::new(stdout).read_line(&mut first).unwrap();
    assert!(first.starts_with("Input: [1, 2, 3"));

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(!stderr.contains("Broken pipe"));
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::with_config("[playback]\nspeed = 5\n");
    qss(&env)
        .args(["trace", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("playback.speed must be between 100 and 980"));
}

// ============================================================================
// play
// ============================================================================

#[test]
fn play_refuses_non_terminal_stdout() {
    let env = TestEnv::new();
    qss(&env)
        .args(["play", "3", "1", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn play_speed_out_of_range_is_usage_error() {
    let env = TestEnv::new();
    qss(&env).args(["play", "--speed", "5"]).assert().code(2);
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn bash_completions_mention_subcommands() {
    let env = TestEnv::new();
    qss(&env)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_qss()").and(predicate::str::contains("trace")));
}
