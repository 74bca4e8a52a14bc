#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn seqflow() -> Command {
    Command::cargo_bin("seqflow").unwrap()
}

fn write_input(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn missing_input_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.svg");
    seqflow()
        .args(["-i", "does-not-exist.txt", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does-not-exist.txt not found"));
    assert!(!out.exists());
}

#[test]
fn writes_svg_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "handshake.txt", "Alice, Bob, syn\nBob, Alice, ack\n");
    let out = dir.path().join("handshake.svg");
    seqflow()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("handshake.txt"));
    assert!(svg.contains("syn"));
}

#[test]
fn svg_goes_to_stdout_without_out() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "flow.txt", "A, B, ping\n");
    seqflow()
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg").and(predicate::str::contains("ping")));
}

#[test]
fn reads_stdin_with_dash() {
    seqflow()
        .args(["-i", "-"])
        .write_stdin("A, A, tick\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("stdin").and(predicate::str::contains("<circle")));
}

#[test]
fn parse_error_exits_non_zero_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.txt", "A, B, go\n@order B, A\n");
    let out = dir.path().join("bad.svg");
    seqflow()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("@order is only allowed as the first statement"));
    assert!(!out.exists());
}

#[test]
fn config_file_changes_geometry() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "flow.txt", "A, B, go\n");
    let config = write_input(
        &dir,
        "seqflow.json",
        r#"{ "layout": { "originX": 0, "originY": 0, "columnWidth": 100, "rowHeight": 10 } }"#,
    );
    seqflow()
        .arg("-i")
        .arg(&input)
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("width=\"300.00\" height=\"20.00\""));
}

#[test]
fn debug_flag_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "flow.txt", "A, B, go, #FF0000\n");
    seqflow()
        .arg("-i")
        .arg(&input)
        .arg("-d")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stderr(predicate::str::contains("defined markers"));
}

#[test]
fn rust_log_enables_debug_without_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "flow.txt", "A, B, go, #FF0000\n");
    seqflow()
        .arg("-i")
        .arg(&input)
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("defined markers"));
}

#[test]
fn progress_is_logged_at_info_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "flow.txt", "A, B, go, #FF0000\n");
    seqflow()
        .arg("-i")
        .arg(&input)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("process start")
                .and(predicate::str::contains("diagram saved"))
                .and(predicate::str::contains("defined markers").not()),
        );
}
