//! Core report parser implementation
//!
//! This module provides the parser entry points. Each call drives its own
//! [`ParseState`] over the input lines and fails fast on the first error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use super::error::ReportError;
use super::lines::split_lines;
use super::state::{OrderingPolicy, ParseState};
use super::stats::ParseResult;
use crate::app::models::DeviceReport;
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Parser for pipe-delimited device inventory reports
///
/// The parser holds only its ordering policy, so one instance can be shared
/// freely between threads; every call owns its accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportParser {
    policy: OrderingPolicy,
}

impl ReportParser {
    /// Create a parser with the permissive ordering policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: OrderingPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::with_policy(config.ordering)
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// Parse an in-memory sequence of raw lines
    pub fn parse_lines<I, S>(&self, lines: I) -> std::result::Result<DeviceReport, ReportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParseState::new(self.policy);

        for (index, line) in lines.into_iter().enumerate() {
            state.consume(index + 1, line.as_ref())?;
        }

        state.finish().map(|result| result.report)
    }

    /// Parse a complete report held in a string
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn parse_str(&self, text: &str) -> std::result::Result<DeviceReport, ReportError> {
        self.parse_lines(split_lines(text))
    }

    /// Read `reader` to exhaustion and parse it
    ///
    /// Line endings are handled as in [`ReportParser::parse_str`]. The reader
    /// is only borrowed for reading; closing it is up to the caller.
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<ParseResult> {
        let mut state = ParseState::new(self.policy);
        let mut line_number = 0;
        let mut chunk = Vec::new();

        loop {
            chunk.clear();
            let read = reader
                .read_until(b'\n', &mut chunk)
                .map_err(|e| Error::io(format!("Failed to read line {}", line_number + 1), e))?;
            if read == 0 {
                break;
            }

            // A `\r\n` pair always lands in one chunk, lone `\r` splits inside it
            let text = std::str::from_utf8(&chunk).map_err(|e| {
                Error::io(
                    format!("Failed to read line {}", line_number + 1),
                    io::Error::new(io::ErrorKind::InvalidData, e),
                )
            })?;
            for line in split_lines(text) {
                line_number += 1;
                state.consume(line_number, line)?;
            }
        }

        let result = state.finish()?;
        info!(
            "Parsed {} device records from {} lines ({} blank)",
            result.stats.device_records, result.stats.lines_read, result.stats.blank_lines
        );

        Ok(result)
    }

    /// Open `path` and parse its contents
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing report file: {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
            _ => Error::io(format!("Failed to open {}", path.display()), e),
        })?;
        debug!("Using {} ordering policy", self.policy);

        self.parse_reader(BufReader::new(file))
    }
}
