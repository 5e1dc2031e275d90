//! Integration tests for the hostexec-writer binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;

fn writer_cmd() -> Command {
    Command::cargo_bin("hostexec-writer").unwrap()
}

#[test]
fn writes_exact_bytes_with_no_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.txt");

    writer_cmd()
        .arg(&file)
        .arg("hello hostexec")
        .assert()
        .success();

    assert_eq!(std::fs::read(&file).unwrap(), b"hello hostexec");
}

#[test]
fn truncates_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.txt");
    std::fs::write(&file, "a much longer previous content that must vanish").unwrap();

    writer_cmd().arg(&file).arg("short").assert().success();

    assert_eq!(std::fs::read(&file).unwrap(), b"short");
}

#[test]
fn created_file_is_owner_readable_and_writable() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.txt");

    writer_cmd().arg(&file).arg("content").assert().success();

    // Fixed creation bits are 0o660; umask may clear the group part
    let mode = std::fs::metadata(&file).unwrap().permissions().mode();
    assert_eq!(mode & 0o600, 0o600);
    assert_eq!(mode & 0o007, 0);
}

#[test]
fn missing_arguments_exit_one() {
    writer_cmd().assert().code(1);

    let dir = tempfile::tempdir().unwrap();
    writer_cmd().arg(dir.path().join("out.txt")).assert().code(1);
}

#[test]
fn unwritable_path_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("no-such-dir").join("out.txt");

    writer_cmd().arg(&file).arg("content").assert().code(1);
    assert!(!file.exists());
}

#[test]
fn empty_string_creates_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.txt");

    writer_cmd().arg(&file).arg("").assert().success();

    assert_eq!(std::fs::read(&file).unwrap(), b"");
}

#[test]
fn help_keeps_its_normal_exit_status() {
    writer_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
