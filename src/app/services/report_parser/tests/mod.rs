//! Test utilities for report parser testing
//!
//! This module provides sample report content and helpers shared by the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod stats_tests;

/// Report with a header, `n` well-formed records and a matching trailer
pub fn create_report(n: usize) -> String {
    let mut lines = vec!["H|SRV1".to_string()];
    for i in 1..=n {
        lines.push(format!(
            "R|35{:013}|86{:013}|SN{:04}|Device {}",
            i, i, i, i
        ));
    }
    lines.push(format!("T|{}", n));
    lines.join("\n")
}

/// Realistic report with surrounding whitespace and blank lines
pub fn create_sample_report() -> String {
    r#"
H|INV-SERVER-01
R|356938035643809|356938035643817|SN-A1001|Pixel 8
   R|490154203237518|490154203237526|SN-A1002|Galaxy S23   

R|353918053874214|353918053874222|SN-A1003|iPhone 15
T|3
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
