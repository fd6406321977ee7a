//! Request documents read from disk.

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;
use xlookup::Value;
use xlookup_cli::{run, Cli, LookupRequest};

fn request_file(suffix: &str, body: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

fn run_file(extra: &[&str], file: &NamedTempFile) -> String {
    let path = file.path().to_str().unwrap();
    let mut args = vec!["xlookup"];
    args.extend_from_slice(extra);
    args.extend_from_slice(&["run", path]);
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run(cli, &mut out, &mut Vec::new()).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn json_request() {
    let file = request_file(
        ".json",
        r#"{"key": 4, "lookup": [1, 3, 5, 7], "result": ["a", "b", "c", "d"], "match_mode": 1}"#,
    );
    assert_eq!(run_file(&[], &file), "c\n");
}

#[test]
fn yaml_request_with_grid() {
    let file = request_file(
        ".yaml",
        "key: 3\nlookup:\n  - [1, 2]\n  - [3, 4]\nresult: [a, b, c, d]\n",
    );
    assert_eq!(run_file(&[], &file), "c\n");
}

#[test]
fn flags_override_request_modes() {
    let file = request_file(
        ".json",
        r#"{"key": "k", "lookup": ["k", "x", "k"], "result": [1, 2, 3], "search_mode": 1}"#,
    );
    assert_eq!(run_file(&[], &file), "1\n");

    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["xlookup", "run", path, "--search-mode", "-1"]).unwrap();
    let mut out = Vec::new();
    run(cli, &mut out, &mut Vec::new()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3\n");
}

#[test]
fn fallback_and_structured_output() {
    let file = request_file(
        ".json",
        r#"{"key": 99, "lookup": [1, 2], "result": ["a", "b"], "if_not_found": "none"}"#,
    );
    let out = run_file(&["--output", "json"], &file);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, serde_json::json!({"status": "ok", "value": "none"}));
}

#[test]
fn wildcard_request() {
    let file = request_file(
        ".yml",
        "key: 'ap*'\nlookup: [banana, Apple, apricot]\nresult: [1, 2, 3]\nmatch_mode: 2\nsearch_mode: -1\n",
    );
    assert_eq!(run_file(&[], &file), "3\n");
}

#[test]
fn non_numeric_mode_is_value_error() {
    let file = request_file(
        ".json",
        r#"{"key": 1, "lookup": [1], "result": [1], "match_mode": "exact"}"#,
    );
    assert_eq!(run_file(&[], &file), "#VALUE!\n");
}

#[test]
fn malformed_request_is_an_error() {
    let file = request_file(".json", "{not json");
    let cli = Cli::try_parse_from(["xlookup", "run", file.path().to_str().unwrap()]).unwrap();
    let err = run(cli, &mut Vec::new(), &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("invalid JSON request"));
}

#[test]
fn load_reads_from_disk() {
    let file = request_file(".json", r#"{"key": "b", "lookup": ["a", "B"], "result": [10, 20]}"#);
    let request = LookupRequest::load(file.path()).unwrap();
    assert_eq!(request.evaluate().unwrap(), Value::from(20));
}

#[test]
fn yaml_non_finite_modes_are_value_errors() {
    let file = request_file(
        ".yaml",
        "key: 3\nlookup: [1, 3]\nresult: [a, b]\nmatch_mode: .nan\nsearch_mode: .inf\n",
    );
    assert_eq!(run_file(&[], &file), "#VALUE!\n");
}

#[test]
fn non_finite_flag_does_not_fall_back_to_request_mode() {
    let file = request_file(
        ".json",
        r#"{"key": 4, "lookup": [1, 3, 5], "result": ["a", "b", "c"], "match_mode": 1}"#,
    );
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["xlookup", "run", path, "--match-mode", "NaN"]).unwrap();
    let mut out = Vec::new();
    run(cli, &mut out, &mut Vec::new()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "#VALUE!\n");
}
