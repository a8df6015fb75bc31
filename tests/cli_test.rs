//! Tests for the `mergemsg` binary.

#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn mergemsg() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mergemsg"))
}

#[test]
fn test_page_to_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("message.txt");

    let status = mergemsg()
        .arg("tests/fixtures/pull_request.html")
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let message = fs::read_to_string(&output).unwrap();
    assert!(message.starts_with("Cache compiled templates (PR #1187)\n\n"));
    assert!(message.contains("\n1. Add `TemplateCache` keyed by path\n"));
    assert!(message.contains("| search results | 340ms  | 90ms  | \n"));
}

#[test]
fn test_fragment_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("desc.html");
    fs::write(&input, "<ol><li>one</li><li>two</li></ol>").unwrap();

    let out = mergemsg().arg("--fragment").arg(&input).output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "\n\n1. one\n2. two\n");
}

#[test]
fn test_json_payload() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pr.json");
    fs::write(&input, r#"{"id": 77, "title": "Bump deps", "description": "Routine."}"#).unwrap();

    let out = mergemsg().arg("--json").arg(&input).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Bump deps (PR #77)\n\nRoutine.\n"
    );
}

#[test]
fn test_missing_header_fails_with_code() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.html");
    fs::write(&input, "<title>Pull Request #2: x</title><p>nothing else</p>").unwrap();

    let out = mergemsg().arg(&input).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error: Pull Request title not found. [PR-MSG-02]"));
}
