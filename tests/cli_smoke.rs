use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn wordcount() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wordcount"))
}

#[test]
fn shows_help() {
    wordcount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordcount"));
}

#[test]
fn counts_literal_text() {
    wordcount()
        .args(["--text", "hello world"])
        .assert()
        .success()
        .stdout("words=2\nlines=1\nchars=11\n");
}

#[test]
fn counts_file_contents() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"a b\nc").expect("write temp file");
    wordcount()
        .arg("--file")
        .arg(file.path())
        .assert()
        .success()
        .stdout("words=3\nlines=2\nchars=5\n");
}

#[test]
fn single_mode_prints_bare_integer() {
    wordcount()
        .args(["--text", "one two three", "--mode", "words"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn json_format_emits_report() {
    wordcount()
        .args(["--text", "hello world", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"words\": 2"));
}

#[test]
fn json_single_mode_serializes_one_field() {
    wordcount()
        .args(["--text", "hello world", "--mode", "lines", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lines\": 1").and(predicate::str::contains("words").not()));
}

#[test]
fn missing_file_fails() {
    wordcount()
        .args(["--file", "no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no/such/file.txt"));
}

#[test]
fn invalid_utf8_file_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("binary.dat");
    std::fs::write(&path, [0xff_u8, 0xfe, 0xfd]).expect("write bytes");
    wordcount()
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn requires_an_input() {
    wordcount()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--text"));
}

#[test]
fn rejects_both_inputs() {
    wordcount()
        .args(["--text", "x", "--file", "y.txt"])
        .assert()
        .failure();
}

#[test]
fn rejects_unknown_mode() {
    wordcount()
        .args(["--text", "x", "--mode", "bytes"])
        .assert()
        .failure();
}

#[test]
fn grapheme_flag_counts_clusters() {
    wordcount()
        .args(["--text", "e\u{0301}", "--mode", "chars"])
        .assert()
        .success()
        .stdout("2\n");
    wordcount()
        .args(["--text", "e\u{0301}", "--mode", "chars", "--graphemes"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn repeated_runs_are_identical() {
    let first = wordcount()
        .args(["--text", "same input"])
        .assert()
        .success();
    let second = wordcount()
        .args(["--text", "same input"])
        .assert()
        .success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}
