//! Integration tests for error handling and exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Missing bindings
//! - Exit code 2: Usage error reported by clap
//! - Exit code 4: Invalid arguments
//! - Exit code 5: I/O error
//! - Exit code 6: Other library errors
//! - Exit code 7: Bindings file error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_missing_bindings_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["--no-env", "resolve", "{root}/{dataset}/{idx:03d}.dat"])
        .arg("--bind")
        .arg("root=/data")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing bindings: 'dataset', 'idx'"));
}

#[test]
fn test_invalid_pattern_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["show", "{root}/chunk_{idx"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_invalid_bind_flag_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "/x", "--bind", "novalue"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("NAME=VALUE"));
}

#[test]
fn test_missing_bindings_file_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["--bindings", "does-not-exist.yaml", "resolve", "/x"])
        .assert()
        .code(5);
}

#[test]
fn test_format_error_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "run_{idx:03d}", "--bind", "idx=seven"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("unknown format code 'd'"));
}

#[test]
fn test_oversized_width_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "run_{idx:999999999999d}", "--bind", "idx=7"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("too many decimal digits"));
}

#[test]
fn test_invalid_suffix_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "/x/file.txt", "--with-suffix", "a/b"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("invalid suffix 'a/b'"));
}

#[test]
fn test_bad_bindings_file_exit_code() {
    let env = TestEnv::new();
    let bad = env.write_file("bad.yaml", "- just\n- a list\n");
    env.command()
        .arg("--bindings")
        .arg(&bad)
        .args(["resolve", "/x"])
        .assert()
        .code(7);

    let unsupported = env.write_file("bindings.toml", "root = '/x'\n");
    env.command()
        .arg("--bindings")
        .arg(&unsupported)
        .args(["resolve", "/x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("unsupported bindings file"));
}

#[test]
fn test_bad_environment_binding_exit_code() {
    let env = TestEnv::new();
    env.command()
        .env("WEND_BIND_", "x")
        .args(["resolve", "/x"])
        .assert()
        .code(7);
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let env = TestEnv::new();
    env.command().arg("frobnicate").assert().code(2);
}
