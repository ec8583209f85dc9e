//! Per-call accumulator for the report parse pass
//!
//! `ParseState` is owned by a single parse call. It is fed one raw line at a
//! time and consumed by [`ParseState::finish`], which runs the post-pass
//! checks and is the only path to a `DeviceReport`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use super::decoders::{classify, decode_header, decode_record, decode_trailer};
use super::error::ReportError;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{DeviceRecord, DeviceReport, HeaderRecord, RecordKind, TrailerRecord};
use crate::{Error, Result};

/// How the relative order of H/R/T lines is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    /// H, R and T lines may appear in any relative order
    #[default]
    Permissive,
    /// Header first, then records, then the trailer, then nothing
    Strict,
}

impl FromStr for OrderingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(OrderingPolicy::Permissive),
            "strict" => Ok(OrderingPolicy::Strict),
            other => Err(Error::configuration(format!(
                "Invalid ordering policy '{}': must be 'permissive' or 'strict'",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingPolicy::Permissive => write!(f, "permissive"),
            OrderingPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Position in the strict `ExpectHeader -> InRecords -> Done` sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ExpectHeader,
    InRecords,
    Done,
}

impl Phase {
    fn expected(&self) -> &'static str {
        match self {
            Phase::ExpectHeader => "a header line first",
            Phase::InRecords => "record or trailer lines after the header",
            Phase::Done => "no lines after the trailer",
        }
    }

    /// Next phase if `kind` is accepted here
    fn advance(&self, kind: RecordKind) -> Option<Phase> {
        match (self, kind) {
            (Phase::ExpectHeader, RecordKind::Header) => Some(Phase::InRecords),
            (Phase::InRecords, RecordKind::Record) => Some(Phase::InRecords),
            (Phase::InRecords, RecordKind::Trailer) => Some(Phase::Done),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ParseState {
    policy: OrderingPolicy,
    phase: Phase,
    header: Option<HeaderRecord>,
    records: Vec<DeviceRecord>,
    trailer: Option<TrailerRecord>,
    stats: ParseStats,
}

impl ParseState {
    pub fn new(policy: OrderingPolicy) -> Self {
        Self {
            policy,
            phase: Phase::ExpectHeader,
            header: None,
            records: Vec::new(),
            trailer: None,
            stats: ParseStats::new(),
        }
    }

    /// Consume the next raw line (1-based `line_number`, blanks counted)
    pub fn consume(
        &mut self,
        line_number: usize,
        raw: &str,
    ) -> std::result::Result<(), ReportError> {
        self.stats.lines_read += 1;

        let line = raw.trim();
        if line.is_empty() {
            self.stats.blank_lines += 1;
            return Ok(());
        }

        let kind = classify(line_number, line)?;
        trace!("Line {}: {} line", line_number, kind);

        match kind {
            RecordKind::Header => {
                if self.header.is_some() {
                    return Err(ReportError::DuplicateHeader { line_number });
                }
                self.check_order(line_number, kind)?;
                let header = decode_header(line_number, line)?;
                debug!("Header at line {}: server {}", line_number, header.server_id());
                self.header = Some(header);
            }
            RecordKind::Record => {
                self.check_order(line_number, kind)?;
                self.records.push(decode_record(line_number, line)?);
                self.stats.device_records += 1;
            }
            RecordKind::Trailer => {
                if self.trailer.is_some() {
                    return Err(ReportError::DuplicateTrailer { line_number });
                }
                self.check_order(line_number, kind)?;
                let trailer = decode_trailer(line_number, line)?;
                debug!("Trailer at line {}: count {}", line_number, trailer.count());
                self.trailer = Some(trailer);
            }
        }

        Ok(())
    }

    /// Run the post-pass checks and assemble the report
    pub fn finish(self) -> std::result::Result<ParseResult, ReportError> {
        let header = self.header.ok_or(ReportError::MissingHeader)?;
        let trailer = self.trailer.ok_or(ReportError::MissingTrailer)?;
        let report = DeviceReport::new(header, self.records, trailer)?;

        Ok(ParseResult {
            report,
            stats: self.stats,
        })
    }

    fn check_order(
        &mut self,
        line_number: usize,
        kind: RecordKind,
    ) -> std::result::Result<(), ReportError> {
        if self.policy == OrderingPolicy::Permissive {
            return Ok(());
        }

        match self.phase.advance(kind) {
            Some(next) => {
                self.phase = next;
                Ok(())
            }
            None => Err(ReportError::OutOfOrder {
                line_number,
                kind,
                expected: self.phase.expected(),
            }),
        }
    }
}
