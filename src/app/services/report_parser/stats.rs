//! Parsing statistics and result structures for report processing

use crate::app::models::DeviceReport;

/// Parsing result with the validated report and pass statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Fully validated report
    pub report: DeviceReport,

    /// Line accounting for the pass that produced `report`
    pub stats: ParseStats,
}

/// Line accounting for a single parse pass
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ParseStats {
    /// Raw lines consumed, blanks included
    pub lines_read: usize,

    /// Lines that were empty after trimming
    pub blank_lines: usize,

    /// Device record lines decoded
    pub device_records: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that carried a record of any kind
    pub fn content_lines(&self) -> usize {
        self.lines_read - self.blank_lines
    }
}
