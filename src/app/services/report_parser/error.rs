//! Report parse error taxonomy
//!
//! Every variant carries enough context (line number, offending text,
//! expected vs. actual values) to render a diagnostic without rescanning
//! the input.

use crate::app::models::RecordKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Unknown record type at line {line_number}: '{tag}'. Line content: {line}")]
    UnknownRecordType {
        line_number: usize,
        tag: char,
        line: String,
    },

    #[error("Malformed {kind} line at line {line_number}: {line}. Expected '{expected}'")]
    MalformedLine {
        line_number: usize,
        kind: RecordKind,
        line: String,
        expected: &'static str,
    },

    #[error(
        "Invalid count in trailer line at line {line_number}: {value}. Expected a non-negative integer"
    )]
    InvalidCount { line_number: usize, value: String },

    #[error("Multiple header lines found at line {line_number}")]
    DuplicateHeader { line_number: usize },

    #[error("Multiple trailer lines found at line {line_number}")]
    DuplicateTrailer { line_number: usize },

    #[error("Missing header line in the report")]
    MissingHeader,

    #[error("Missing trailer line in the report")]
    MissingTrailer,

    #[error("Record count mismatch. Expected {declared}, but found {actual} records")]
    RecordCountMismatch { declared: usize, actual: usize },

    /// Only produced under the strict ordering policy
    #[error("Unexpected {kind} line at line {line_number}: expected {expected}")]
    OutOfOrder {
        line_number: usize,
        kind: RecordKind,
        expected: &'static str,
    },
}

impl ReportError {
    /// Build a malformed-line error for the given kind
    pub fn malformed(line_number: usize, kind: RecordKind, line: impl Into<String>) -> Self {
        Self::MalformedLine {
            line_number,
            kind,
            line: line.into(),
            expected: kind.expected_shape(),
        }
    }

    /// 1-based line number the error refers to, if it is tied to a line
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::UnknownRecordType { line_number, .. }
            | Self::MalformedLine { line_number, .. }
            | Self::InvalidCount { line_number, .. }
            | Self::DuplicateHeader { line_number }
            | Self::DuplicateTrailer { line_number }
            | Self::OutOfOrder { line_number, .. } => Some(*line_number),
            Self::MissingHeader | Self::MissingTrailer | Self::RecordCountMismatch { .. } => None,
        }
    }

    /// Stable name of the error kind, for summaries and logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::UnknownRecordType { .. } => "UnknownRecordType",
            Self::MalformedLine { .. } => "MalformedLine",
            Self::InvalidCount { .. } => "InvalidCount",
            Self::DuplicateHeader { .. } => "DuplicateHeader",
            Self::DuplicateTrailer { .. } => "DuplicateTrailer",
            Self::MissingHeader => "MissingHeader",
            Self::MissingTrailer => "MissingTrailer",
            Self::RecordCountMismatch { .. } => "RecordCountMismatch",
            Self::OutOfOrder { .. } => "OutOfOrder",
        }
    }
}
