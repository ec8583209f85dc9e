//! Line classification and per-kind decoders
//!
//! Decoders are pure functions over an already trimmed line. They split on
//! `|` with no quoting or escaping and take field values verbatim.

use super::error::ReportError;
use crate::app::models::{DeviceRecord, HeaderRecord, RecordKind, TrailerRecord};
use crate::constants::{FIELD_DELIMITER, arity};

/// Classify a trimmed, non-empty line by its first character
pub fn classify(line_number: usize, line: &str) -> Result<RecordKind, ReportError> {
    let first = line.chars().next();

    first
        .and_then(RecordKind::from_tag)
        .ok_or_else(|| ReportError::UnknownRecordType {
            line_number,
            // An empty line never reaches here from the parse pass
            tag: first.unwrap_or(' '),
            line: line.to_string(),
        })
}

/// Decode `H|ServerID`
pub fn decode_header(line_number: usize, line: &str) -> Result<HeaderRecord, ReportError> {
    let fields = split_checked(line_number, line, RecordKind::Header, arity::HEADER)?;
    Ok(HeaderRecord::new(fields[1]))
}

/// Decode `R|IMEI1|IMEI2|SerialNo|DeviceName`
pub fn decode_record(line_number: usize, line: &str) -> Result<DeviceRecord, ReportError> {
    let fields = split_checked(line_number, line, RecordKind::Record, arity::RECORD)?;
    Ok(DeviceRecord::new(fields[1], fields[2], fields[3], fields[4]))
}

/// Decode `T|Count`
pub fn decode_trailer(line_number: usize, line: &str) -> Result<TrailerRecord, ReportError> {
    let fields = split_checked(line_number, line, RecordKind::Trailer, arity::TRAILER)?;

    let count = fields[1]
        .parse::<usize>()
        .map_err(|_| ReportError::InvalidCount {
            line_number,
            value: fields[1].to_string(),
        })?;

    Ok(TrailerRecord::new(count))
}

/// Split a line and check both arity and the field-0 tag
fn split_checked<'a>(
    line_number: usize,
    line: &'a str,
    kind: RecordKind,
    expected_fields: usize,
) -> Result<Vec<&'a str>, ReportError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if fields.len() != expected_fields || fields[0] != kind.tag_str() {
        return Err(ReportError::malformed(line_number, kind, line));
    }

    Ok(fields)
}
