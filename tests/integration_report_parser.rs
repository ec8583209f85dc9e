//! Integration tests for the report parser and CLI commands
//!
//! These tests exercise the public API end to end: files on disk, JSON
//! rendering and the parse/validate command runners.

use device_report::app::services::json_output::{JsonStyle, render_json};
use device_report::cli::args::{CommonArgs, ParseArgs, ValidateArgs};
use device_report::cli::commands;
use device_report::{Error, OrderingPolicy, ReportError, ReportParser};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

const SAMPLE_REPORT: &str = include_str!("data/sample_device_report.csv");

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("sample_device_report.csv")
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn common_args() -> CommonArgs {
    CommonArgs {
        strict_order: false,
        config_file: None,
        verbose: 0,
        quiet: true,
    }
}

#[test]
fn test_parse_sample_file() {
    let result = ReportParser::new().parse_file(&sample_path()).unwrap();
    let report = &result.report;

    assert_eq!(report.header().server_id(), "INV-SERVER-01");
    assert_eq!(report.len(), 4);
    assert_eq!(report.trailer().count(), 4);

    let names: Vec<&str> = report
        .device_details()
        .iter()
        .map(|r| r.device_name())
        .collect();
    assert_eq!(names, vec!["Pixel 8", "Galaxy S23", "iPhone 15", "Moto G54"]);

    assert_eq!(result.stats.blank_lines, 1);
    assert_eq!(result.stats.device_records, 4);
}

#[test]
fn test_sample_file_and_string_agree() {
    let parser = ReportParser::new();

    let from_file = parser.parse_file(&sample_path()).unwrap().report;
    let from_str = parser.parse_str(SAMPLE_REPORT).unwrap();

    assert_eq!(from_file, from_str);
}

#[test]
fn test_sample_json_shape() {
    let report = ReportParser::new().parse_str(SAMPLE_REPORT).unwrap();
    let json = render_json(&report, JsonStyle::Pretty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["header"]["recordType"], "H");
    assert_eq!(value["header"]["serverID"], "INV-SERVER-01");
    assert_eq!(value["deviceDetails"].as_array().unwrap().len(), 4);
    assert_eq!(value["deviceDetails"][2]["serialNo"], "SN-A1003");
    assert_eq!(value["trailer"]["count"], 4);
}

#[test]
fn test_file_errors_surface_as_report_errors() {
    let file = write_temp("H|SRV1\nR|1|2|3|Dev\nT|five\n");
    let err = ReportParser::new().parse_file(file.path()).unwrap_err();

    assert!(matches!(
        err,
        Error::Report(ReportError::InvalidCount { line_number: 3, .. })
    ));
    assert!(err.to_string().contains("five"));
}

#[test]
fn test_strict_policy_on_file() {
    let file = write_temp("R|1|2|3|4\nH|SRV1\nT|1\n");

    assert!(ReportParser::new().parse_file(file.path()).is_ok());

    let err = ReportParser::with_policy(OrderingPolicy::Strict)
        .parse_file(file.path())
        .unwrap_err();
    assert!(matches!(
        err.as_report_error(),
        Some(ReportError::OutOfOrder { line_number: 1, .. })
    ));
}

#[test]
fn test_parse_command_writes_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("report.json");

    let args = ParseArgs {
        input: Some(sample_path()),
        output: Some(output.clone()),
        compact: true,
        force_overwrite: false,
        common: common_args(),
    };

    let stats = commands::run_parse(args).unwrap();
    assert_eq!(stats.device_records, 4);

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["deviceDetails"][0]["imei1"], "356938035643809");
}

#[test]
fn test_parse_command_refuses_to_overwrite() {
    let existing = write_temp("{}");

    let args = ParseArgs {
        input: Some(sample_path()),
        output: Some(existing.path().to_path_buf()),
        compact: false,
        force_overwrite: false,
        common: common_args(),
    };

    assert!(matches!(
        commands::run_parse(args),
        Err(Error::OutputExists { .. })
    ));
    assert_eq!(std::fs::read_to_string(existing.path()).unwrap(), "{}");
}

#[test]
fn test_parse_command_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config =
        write_temp(r#"{ "parser": { "ordering": "strict" }, "output": { "pretty": true } }"#);
    let input = write_temp("R|1|2|3|4\nH|SRV1\nT|1\n");

    let args = ParseArgs {
        input: Some(input.path().to_path_buf()),
        output: Some(temp_dir.path().join("out.json")),
        compact: false,
        force_overwrite: false,
        common: CommonArgs {
            config_file: Some(config.path().to_path_buf()),
            ..common_args()
        },
    };

    let err = commands::run_parse(args).unwrap_err();
    assert!(matches!(
        err.as_report_error(),
        Some(ReportError::OutOfOrder { .. })
    ));
    assert!(!temp_dir.path().join("out.json").exists());
}

#[test]
fn test_validate_command() {
    let ok = commands::run_validate(ValidateArgs {
        input: Some(sample_path()),
        common: common_args(),
    })
    .unwrap();
    assert_eq!(ok.device_records, 4);

    let bad = write_temp("H|SRV1\nH|SRV2\nT|0\n");
    let err = commands::run_validate(ValidateArgs {
        input: Some(bad.path().to_path_buf()),
        common: common_args(),
    })
    .unwrap_err();
    assert!(matches!(
        err.as_report_error(),
        Some(ReportError::DuplicateHeader { line_number: 2 })
    ));
}

#[test]
fn test_validate_command_missing_input() {
    let temp_dir = TempDir::new().unwrap();

    let err = commands::run_validate(ValidateArgs {
        input: Some(temp_dir.path().join("absent.csv")),
        common: common_args(),
    })
    .unwrap_err();

    assert!(matches!(err, Error::FileNotFound { .. }));
}
