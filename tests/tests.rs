use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn dlog(workdir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dlog"));
    cmd.current_dir(workdir);
    cmd
}

fn log_path(workdir: &Path, filename: &str) -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    workdir.join("logs").join(today).join(filename)
}

fn line_format() -> impl Predicate<str> {
    predicate::str::is_match(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] \[main\.rs:\d+\] ").unwrap()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_missing_arguments() {
    let dir = TempDir::new().unwrap();

    dlog(dir.path())
        .arg("app.log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    assert!(!dir.path().join("logs").exists());
}

#[test]
fn test_unknown_mode() {
    let dir = TempDir::new().unwrap();

    dlog(dir.path())
        .args(["app.log", "shout", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_unwritable_logs_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("logs"), "not a directory").unwrap();

    dlog(dir.path())
        .args(["app.log", "print", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error creating logs directory"));
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn test_print_writes_file_and_stdout() {
    let dir = TempDir::new().unwrap();

    let output = dlog(dir.path())
        .args(["transactions.log", "print", "deposit", "100"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let contents = fs::read_to_string(log_path(dir.path(), "transactions.log")).unwrap();

    // Same single line on both sinks
    assert_eq!(stdout, contents);
    assert_eq!(contents.lines().count(), 1);

    let line = contents.lines().next().unwrap();
    assert!(line_format().eval(line), "malformed line: {}", line);
    assert!(line.ends_with("] deposit 100"));
}

#[test]
fn test_empty_filename_uses_default() {
    let dir = TempDir::new().unwrap();

    dlog(dir.path())
        .args(["", "print", "hello"])
        .assert()
        .success();

    let contents = fs::read_to_string(log_path(dir.path(), "application.log")).unwrap();
    assert!(contents.ends_with("] hello\n"));
}

#[test]
fn test_error_tag() {
    let dir = TempDir::new().unwrap();

    dlog(dir.path())
        .args(["app.log", "error", "insufficient", "funds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("] [ERROR] insufficient funds"));

    let contents = fs::read_to_string(log_path(dir.path(), "app.log")).unwrap();
    let line = contents.lines().next().unwrap();
    assert!(line_format().eval(line));
    assert!(line.ends_with("] [ERROR] insufficient funds"));
}

#[test]
fn test_rerun_appends() {
    let dir = TempDir::new().unwrap();

    for word in ["first", "second", "third"] {
        dlog(dir.path())
            .args(["app.log", "print", word])
            .assert()
            .success();
    }

    let contents = fs::read_to_string(log_path(dir.path(), "app.log")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("] first"));
    assert!(lines[1].ends_with("] second"));
    assert!(lines[2].ends_with("] third"));
}

// ============================================================================
// Fatal Tests
// ============================================================================

#[test]
fn test_fatal_writes_then_exits() {
    let dir = TempDir::new().unwrap();

    dlog(dir.path())
        .args(["app.log", "print", "starting"])
        .assert()
        .success();

    dlog(dir.path())
        .args(["app.log", "fatal", "ledger", "corrupted"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("] ledger corrupted"));

    let contents = fs::read_to_string(log_path(dir.path(), "app.log")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] starting"));
    assert!(line_format().eval(lines[1]));
    assert!(lines[1].ends_with("] ledger corrupted"));
}

#[test]
fn test_fatalf_writes_then_exits() {
    let dir = TempDir::new().unwrap();

    dlog(dir.path())
        .args(["app.log", "fatalf", "disk", "full"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("] disk full (2 words)"));

    let contents = fs::read_to_string(log_path(dir.path(), "app.log")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(line_format().eval(lines[0]));
    assert!(lines[0].ends_with("] disk full (2 words)"));
}
