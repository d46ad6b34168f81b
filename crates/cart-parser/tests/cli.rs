use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn cli_exe() -> &'static str {
    env!("CARGO_BIN_EXE_cart-parser")
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str], file: &Path) -> Output {
    Command::new(cli_exe())
        .args(args)
        .arg(file)
        .env_remove("CART_PARSER_FORMAT")
        .env("CART_PARSER_LOG", "off")
        .output()
        .expect("run cart-parser")
}

#[test]
fn validate_valid_file() {
    let output = run(&["validate"], &fixture("cart.csv"));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().ends_with("cart.csv: OK"), "{stdout}");
}

#[test]
fn validate_invalid_file_exits_with_failure() {
    let output = run(&["validate"], &fixture("invalid.csv"));
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("5 error(s)"), "{stdout}");
    assert!(stdout.contains(
        "[header] row 0, column 0: Expected header to be named \"Product name\" but received test."
    ));
}

#[test]
fn validate_json_report() {
    let output = run(&["--format", "json", "validate"], &fixture("invalid.csv"));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"].as_array().unwrap().len(), 5);
    assert_eq!(report["errors"][1]["column"], -1);
}

#[test]
fn total_json() {
    let output = run(&["--format", "json", "total"], &fixture("cart.csv"));
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["items"], 5);
    let total = report["total"].as_f64().unwrap();
    assert!((total - 348.32).abs() < 1e-9);
}

#[test]
fn total_of_invalid_file_fails() {
    let output = run(&["total"], &fixture("invalid.csv"));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("5 error(s)"), "{stderr}");
}

#[test]
fn items_lists_every_line() {
    let output = run(&["items"], &fixture("cart.csv"));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Mollis consequat x 2 @ 9 = 18"), "{stdout}");
    assert_eq!(stdout.lines().count(), 6);
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["total"], &dir.path().join("missing.csv"));
    assert!(!output.status.success());
}
