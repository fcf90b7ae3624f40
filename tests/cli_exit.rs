//! Process-level tests for argument handling: any positional count other
//! than two must exit with status 1, printing usage to stderr.

use std::process::Command;

fn run_with_args(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_kvserve"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn zero_args_exit_with_status_one() {
    let output = run_with_args(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
}

#[test]
fn one_arg_exits_with_status_one() {
    let output = run_with_args(&["myvault"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn three_args_exit_with_status_one() {
    let output = run_with_args(&["myvault", "mysecret", "extra"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
}
