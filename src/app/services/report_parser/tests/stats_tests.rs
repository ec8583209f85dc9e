//! Tests for parsing statistics

use super::super::stats::ParseStats;
use super::*;
use crate::app::services::report_parser::ReportParser;
use std::io::Cursor;

#[test]
fn test_parse_stats_empty() {
    let stats = ParseStats::new();

    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.blank_lines, 0);
    assert_eq!(stats.device_records, 0);
    assert_eq!(stats.content_lines(), 0);
}

#[test]
fn test_parse_stats_counts_blank_lines() {
    let result = ReportParser::new()
        .parse_reader(Cursor::new(create_sample_report()))
        .unwrap();

    // Leading newline, one interior blank line, trailing newline has no line
    assert_eq!(result.stats.lines_read, 7);
    assert_eq!(result.stats.blank_lines, 2);
    assert_eq!(result.stats.content_lines(), 5);
    assert_eq!(result.stats.device_records, 3);
}
