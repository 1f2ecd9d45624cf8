// tokenrx/tests/cli_integration_tests.rs
//! Command-line integration tests for the `tokenrx` binary.
//!
//! Each test writes its token, rule and pattern files into a temporary
//! directory, runs the binary through `assert_cmd` and checks stdout, stderr
//! and the exit status.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const TOKENS: &str = r#"[
  { "id": "c1", "name": "Colors / Brand / Primary", "type": "color" },
  { "id": "s1", "name": "Spacing / space small", "type": "measurement" },
  { "id": "n1", "type": "border" }
]"#;

fn write(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn tokenrx() -> Command {
    let mut cmd = Command::cargo_bin("tokenrx").unwrap();
    cmd.env_remove("TOKENRX_PATTERNS");
    cmd
}

fn names(stdout: &[u8]) -> Vec<Option<String>> {
    let tokens: Vec<Value> = serde_json::from_slice(stdout).expect("stdout must be a JSON array");
    tokens
        .iter()
        .map(|t| t.get("name").and_then(Value::as_str).map(str::to_string))
        .collect()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn apply_reads_stdin_and_prints_tokens() -> Result<()> {
    let dir = tempdir()?;
    let rules = write(
        &dir,
        "rules.yaml",
        "rules:\n  - name: groups\n    keys: [name]\n    regex: { pattern: '(.*?)\\/', flags: g }\n    trim: true\n",
    );

    let assert = tokenrx()
        .args(["apply", "--rules", path_arg(&rules)])
        .write_stdin(TOKENS)
        .assert()
        .success()
        .stderr(predicate::str::contains("Change Summary"))
        .stderr(predicate::str::contains("groups"));

    let output = names(&assert.get_output().stdout);
    assert_eq!(
        output,
        vec![Some("Primary".to_string()), Some("space small".to_string()), None]
    );
    Ok(())
}

#[test]
fn apply_writes_output_file_and_diff() -> Result<()> {
    let dir = tempdir()?;
    let tokens = write(&dir, "tokens.json", TOKENS);
    let rules = write(
        &dir,
        "rules.json",
        r#"{ "keys": ["name"], "regex": { "pattern": " ", "flags": "g" }, "replaceBy": "-" }"#,
    );
    let out = dir.path().join("out.json");

    tokenrx()
        .args([
            "apply",
            "--tokens",
            path_arg(&tokens),
            "--rules",
            path_arg(&rules),
            "--output",
            path_arg(&out),
            "--diff",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Diff Analysis"))
        .stderr(predicate::str::contains("\"name\": \"Colors-/-Brand-/-Primary\""))
        .stderr(predicate::str::contains("Writing transformed tokens to file"));

    let written = fs::read(&out)?;
    assert_eq!(
        names(&written),
        vec![
            Some("Colors-/-Brand-/-Primary".to_string()),
            Some("Spacing-/-space-small".to_string()),
            None
        ]
    );
    Ok(())
}

#[test]
fn apply_uses_user_named_patterns() -> Result<()> {
    let dir = tempdir()?;
    let rules = write(
        &dir,
        "rules.yaml",
        "rules:\n  - keys: [name]\n    regex: space\n    replaceBy: size\n    trim: true\n",
    );
    let patterns = write(&dir, "patterns.yaml", "patterns:\n  - name: space\n    pattern: '(?i)space'\n    flags: g\n");

    let assert = tokenrx()
        .args([
            "--quiet",
            "apply",
            "--rules",
            path_arg(&rules),
            "--patterns",
            path_arg(&patterns),
        ])
        .write_stdin(TOKENS)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let output = names(&assert.get_output().stdout);
    assert_eq!(output[1].as_deref(), Some("Spacing / size small"));
    Ok(())
}

#[test]
fn apply_fails_on_invalid_pattern_without_output() -> Result<()> {
    let dir = tempdir()?;
    let rules = write(&dir, "rules.yaml", "keys: [name]\nregex: { pattern: '(.*?' }\n");

    tokenrx()
        .args(["apply", "--rules", path_arg(&rules)])
        .write_stdin(TOKENS)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to apply rules"));
    Ok(())
}

#[test]
fn apply_rejects_non_array_tokens() -> Result<()> {
    let dir = tempdir()?;
    let rules = write(&dir, "rules.yaml", "keys: [name]\nregex: a\n");

    tokenrx()
        .args(["apply", "--rules", path_arg(&rules)])
        .write_stdin(r#"{ "id": "x" }"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse tokens"));
    Ok(())
}

#[test]
fn check_reports_resolution_and_failures() -> Result<()> {
    let dir = tempdir()?;
    let rules = write(
        &dir,
        "rules.yaml",
        "rules:\n  - name: ws\n    keys: [name]\n    regex: whitespace\n  - name: bad\n    keys: [name]\n    regex: { pattern: 'x', flags: 'gq' }\n",
    );

    tokenrx()
        .args(["check", "--rules", path_arg(&rules)])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ok   ws: /\\s+/g (named pattern 'whitespace')"))
        .stdout(predicate::str::contains("FAIL bad:"))
        .stderr(predicate::str::contains("1 of 2 rule(s) failed to normalize"));
    Ok(())
}

#[test]
fn check_reports_success_when_every_rule_compiles() -> Result<()> {
    let dir = tempdir()?;
    let rules = write(
        &dir,
        "rules.yaml",
        "rules:\n  - name: digits\n    keys: [name]\n    regex: digits\n  - name: dash\n    keys: [name]\n    regex: { pattern: '-', flags: g }\n",
    );

    tokenrx()
        .args(["check", "--rules", path_arg(&rules)])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok   digits: /\\d+/g (named pattern 'digits')"))
        .stdout(predicate::str::contains("ok   dash: /-/g (structured)"))
        .stderr(predicate::str::contains("All 2 rule(s) normalized."));
    Ok(())
}

#[test]
fn patterns_lists_builtin_library_as_json() -> Result<()> {
    let assert = tokenrx().args(["patterns", "--json"]).assert().success();
    let library: Value = serde_json::from_slice(&assert.get_output().stdout)?;
    let names: Vec<&str> = library["patterns"]
        .as_array()
        .expect("patterns array")
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert!(names.contains(&"whitespace"));
    assert!(names.contains(&"leading-path"));
    Ok(())
}
