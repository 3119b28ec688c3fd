//! Integration tests for output rendering

use std::fs;
use std::path::PathBuf;

use prosaic_foundation::ErrorKind;
use prosaic_language::{FrontendConfig, Parser};
use prosaic_runtime::OutputFormat;
use prosaic_runtime::render::{read_source, render, to_json};

const LIBRARY: &str = "define structure &pair; $left as integer, and $right as integer.
define function @swap; $p as &pair: return $p.
for architecture \"wasm\": $pages as integer with value 16.
program: call @swap with $origin.";

#[test]
fn every_format_renders_a_valid_program() {
    let parser = Parser::new();
    for format in OutputFormat::ALL {
        let output = render(&parser, LIBRARY, format)
            .unwrap_or_else(|e| panic!("{} failed: {e}", format.name()));
        assert!(
            output.ends_with('\n'),
            "{} output is not line terminated",
            format.name()
        );
    }
}

#[test]
fn canonical_output_reparses_to_itself() {
    let parser = Parser::new();
    let once = render(&parser, LIBRARY, OutputFormat::Canonical).expect("renders");
    let twice = render(&parser, &once, OutputFormat::Canonical).expect("renders");
    assert_eq!(once, twice);
    assert_eq!(once.lines().count(), 4);
}

#[test]
fn token_rows_carry_positions() {
    let parser = Parser::new();
    let output = render(&parser, "set $x\nto 5", OutputFormat::Tokens).expect("renders");
    let rows: Vec<Vec<&str>> = output
        .lines()
        .map(|l| l.split_whitespace().collect())
        .collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][0], "1:5");
    assert_eq!(rows[1].last(), Some(&"$x"));
    assert_eq!(rows[2][0], "2:1");
}

#[test]
fn json_output_is_structured() {
    let parser = Parser::with_config(FrontendConfig::for_file("lib.prose"));
    let output = render(&parser, LIBRARY, OutputFormat::Json).expect("renders");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(value["filename"], "lib.prose");
    assert_eq!(value["statements"].as_array().map(Vec::len), Some(4));

    let tokens = parser.tokenize("break");
    let value: serde_json::Value =
        serde_json::from_str(&to_json(&tokens).expect("serializes")).expect("valid json");
    assert_eq!(value[0]["raw"], "break");
}

#[test]
fn sorted_output_groups_by_architecture() {
    let parser = Parser::new();
    let output = render(&parser, LIBRARY, OutputFormat::Sort).expect("renders");
    assert!(output.starts_with("common:\n"));
    assert!(output.contains("architecture \"wasm\":"));
    assert!(!output.contains("skipped"));

    let common: Vec<&str> = output
        .lines()
        .take_while(|l| !l.starts_with("architecture"))
        .collect();
    let has_row = |row: [&str; 2]| common.iter().any(|l| l.split_whitespace().eq(row));
    assert!(has_row(["structures", "pair"]));
    assert!(has_row(["functions", "swap"]));
}

#[test]
fn parse_failures_carry_the_filename() {
    let parser = Parser::with_config(FrontendConfig::for_file("bad.prose"));
    let err = render(&parser, "break.\ncall 5.", OutputFormat::Tree).expect_err("fails");
    assert!(matches!(err.kind, ErrorKind::NoMatchingRule { line: 2, .. }));
    assert!(err.to_string().contains("bad.prose:2:1"));
}

#[test]
fn reads_source_files() {
    let name = format!("prosaic-render-{}.prose", std::process::id());
    let path: PathBuf = std::env::temp_dir().join(name);
    fs::write(&path, "break.\n").expect("writes");
    let source = read_source(&path).expect("reads");
    let _ = fs::remove_file(&path);
    assert_eq!(source, "break.\n");

    let err = read_source(&path).expect_err("file is gone");
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
}
