//! Integration tests for the hostexec-run binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn run_cmd() -> Command {
    Command::cargo_bin("hostexec-run").unwrap()
}

#[test]
fn shell_success_exits_zero() {
    run_cmd().args(["shell", "exit 0"]).assert().success();
}

#[test]
fn shell_failure_exits_one() {
    run_cmd().args(["shell", "exit 5"]).assert().code(1);
}

#[test]
fn exec_runs_command_directly() {
    run_cmd()
        .args(["exec", "/bin/echo", "direct", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("direct run"));
}

#[test]
fn exec_nonexistent_path_exits_one() {
    run_cmd()
        .args(["exec", "/no/such/binary"])
        .assert()
        .code(1);
}

#[test]
fn exec_with_output_redirects_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("captured.txt");

    run_cmd()
        .args(["exec", "--output"])
        .arg(&out)
        .args(["/bin/echo", "into the file"])
        .assert()
        .success()
        // The child's stdout went to the file, not the terminal
        .stdout(predicate::str::contains("into the file").not());

    assert_eq!(std::fs::read(&out).unwrap(), b"into the file\n");
}
