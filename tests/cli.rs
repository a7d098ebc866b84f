// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("commit-msg").unwrap()
}

fn message_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn valid_message_passes() {
    let file = message_file("feat(parser): add support for arrays\n\nCloses #12\n");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("VALIDATED"))
        .stdout(contains("Commit message rule").not());
}

#[test]
fn merge_message_passes() {
    let file = message_file("Merge branch 'main' into feature/x\n");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("MERGE"));
}

#[test]
fn bad_header_fails_with_rule_reference() {
    let file = message_file("update stuff\n");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(contains("BAD_HEADER_FORMAT"))
        .stdout(contains("update stuff"))
        .stdout(contains("Commit message rule as follow"));
}

#[test]
fn wrong_type_is_reported_but_passes() {
    let file = message_file("foo: does something\n");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("WRONG_TYPE"))
        .stdout(contains("VALIDATED"));
}

#[test]
fn wrong_type_fails_in_strict_mode() {
    let file = message_file("foo: does something\n");
    cmd()
        .args(["--strict"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(contains("WRONG_TYPE"))
        .stdout(contains("VALIDATED").not());
}

#[test]
fn overlong_header_fails() {
    let file = message_file(&format!("feat: {}\n", "x".repeat(114)));
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(contains("LINE_OVERLONG"))
        .stdout(contains("120"));
}

#[test]
fn missing_blank_line_fails() {
    let file = message_file("feat: short header\nnon-blank body line immediately\n");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(contains("NO_BLANK_LINE_BEFORE_BODY"));
}

#[test]
fn empty_message_fails() {
    let file = message_file("  \n\n");
    cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(contains("EMPTY_MESSAGE"));
}

#[test]
fn missing_argument_fails() {
    cmd()
        .assert()
        .code(1)
        .stdout(contains("ARG_MISSING"))
        .stdout(contains("Commit message rule").not());
}

#[test]
fn empty_argument_is_missing() {
    cmd()
        .arg("")
        .assert()
        .code(1)
        .stdout(contains("ARG_MISSING"))
        .stderr(contains("error:").not());
}

#[test]
fn missing_file_fails() {
    cmd()
        .arg("/definitely/not/here/COMMIT_EDITMSG")
        .assert()
        .code(1)
        .stdout(contains("FILE_MISSING"))
        .stdout(contains("/definitely/not/here/COMMIT_EDITMSG"));
}

#[test]
fn require_body_flag() {
    let file = message_file("fix: typo\n");
    cmd()
        .arg("--require-body")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(contains("BODY_MISSING"));
}

#[test]
fn chinese_messages() {
    let file = message_file("feat: short header\nno blank line\n");
    cmd()
        .args(["--lang", "zh-cn"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(contains("header 和 body 之间没有空一行"))
        .stdout(contains("Commit message 的格式要求如下"));
}

#[test]
fn json_output() {
    let file = message_file("foo: does something\n");
    let output = cmd()
        .args(["--format", "json"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["config"]["lang"], "en");
    assert_eq!(json["config"]["strict_types"], false);
    assert_eq!(json["diagnostics"][0]["kind"], "WRONG_TYPE");
    assert_eq!(json["diagnostics"][0]["commit_type"], "foo");
    assert_eq!(json["diagnostics"][1]["kind"], "VALIDATED");
}

#[test]
fn crlf_message_passes() {
    let file = message_file("fix: handle input\r\n\r\nMore detail here.\r\n");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("VALIDATED"));
}
