//! Integration tests for the `classmodel` binary

use crate::{fixture, fixtures_dir};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with a colourless configuration from `dir`
fn run(
    dir: &TempDir,
    args: &[&str],
) -> Output {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "[diagnostics]\ncolors = false\n").unwrap();
    }
    Command::new(env!("CARGO_BIN_EXE_classmodel"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .unwrap()
}

fn create_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("classmodel {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_check_fixture_directory() {
    let dir = TempDir::new().unwrap();
    let fixtures = fixtures_dir();
    let output = run(&dir, &["check", arg(&fixtures)]);
    assert!(output.status.success(), "{}", stdout(&output));
    assert!(stdout(&output).contains("All checks passed (3 files)"));
}

#[test]
fn test_check_invalid_file() {
    let dir = TempDir::new().unwrap();
    let source = fixture("widgets.model").replace("fmt.Stringer", "xyz.Stringer");
    let file = create_file(&dir, "invalid.model", &source);

    let output = run(&dir, &["check", arg(&file)]);
    assert!(!output.status.success());
    let out = stdout(&output);
    assert!(out.contains("error: "));
    assert!(out.contains("Unknown module alias: xyz"));
    assert!(out.contains("1 of 1 file failed"));
}

#[test]
fn test_check_json() {
    let dir = TempDir::new().unwrap();
    create_file(&dir, "good.model", &fixture("minimal.model"));
    create_file(&dir, "bad.model", "package widgets\n");

    let output = run(&dir, &["check", "--json", arg(dir.path())]);
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["passed"], serde_json::json!(false));
    assert_eq!(files[0]["stage"], serde_json::json!("syntax"));
    assert_eq!(files[0]["line"], serde_json::json!(1));
    assert_eq!(files[1]["passed"], serde_json::json!(true));
}

#[test]
fn test_check_missing_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.model");
    let output = run(&dir, &["check", arg(&missing)]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Path does not exist"));
}

#[test]
fn test_format_prints_canonical_text() {
    let dir = TempDir::new().unwrap();
    let canonical = fixture("collections.model");
    let shuffled = canonical.replace(
        "\tReverseValues()\n\tSortValues()\n",
        "\tSortValues()\n\tReverseValues()\n",
    );
    assert_ne!(shuffled, canonical);
    let file = create_file(&dir, "shuffled.model", &shuffled);

    let output = run(&dir, &["format", arg(&file)]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), canonical);
}

#[test]
fn test_format_check_and_write() {
    let dir = TempDir::new().unwrap();
    let canonical = fixture("widgets.model");
    let file = create_file(&dir, "widgets.model", &canonical.replace("package widgets", "package  widgets"));

    let output = run(&dir, &["format", "--check", arg(&file)]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("is not in canonical form"));

    let output = run(&dir, &["format", "--write", arg(&file)]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), canonical);

    let output = run(&dir, &["format", "--check", arg(&file)]);
    assert!(output.status.success());
}

#[test]
fn test_format_reports_syntax_error() {
    let dir = TempDir::new().unwrap();
    let file = create_file(&dir, "broken.model", "package widgets\n");

    let output = run(&dir, &["format", arg(&file)]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("error[syntax]"));
    assert!(err.contains("An unexpected token was received by the parser"));
}

#[test]
fn test_dump_json() {
    let dir = TempDir::new().unwrap();
    let file = create_file(&dir, "widgets.model", &fixture("widgets.model"));

    let output = run(&dir, &["dump", arg(&file)]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["header"]["identifier"], serde_json::json!("widgets"));
    assert_eq!(
        value["interfaces"]["instances"][0]["declaration"]["identifier"],
        serde_json::json!("WidgetLike")
    );
}
