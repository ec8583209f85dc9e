//! Data models for device inventory reports
//!
//! This module contains the typed records decoded from a report file and the
//! validated `DeviceReport` aggregate handed to downstream serializers.

use crate::app::services::report_parser::ReportError;
use crate::constants::{shapes, tags};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Record Kind
// =============================================================================

/// Role of a line in the report, identified by its leading tag character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Header,
    Record,
    Trailer,
}

impl RecordKind {
    /// Map a leading tag character to its record kind
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            tags::HEADER => Some(RecordKind::Header),
            tags::RECORD => Some(RecordKind::Record),
            tags::TRAILER => Some(RecordKind::Trailer),
            _ => None,
        }
    }

    /// The tag as it must appear in field 0
    pub fn tag_str(&self) -> &'static str {
        match self {
            RecordKind::Header => tags::HEADER_STR,
            RecordKind::Record => tags::RECORD_STR,
            RecordKind::Trailer => tags::TRAILER_STR,
        }
    }

    /// Line shape used in diagnostics, e.g. `T|Count`
    pub fn expected_shape(&self) -> &'static str {
        match self {
            RecordKind::Header => shapes::HEADER,
            RecordKind::Record => shapes::RECORD,
            RecordKind::Trailer => shapes::TRAILER,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Header => "header",
            RecordKind::Record => "record",
            RecordKind::Trailer => "trailer",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Line Records
// =============================================================================

/// Document-level header line (`H|ServerID`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderRecord {
    record_type: &'static str,

    /// Opaque identifier of the server that produced the report
    #[serde(rename = "serverID")]
    server_id: String,
}

impl HeaderRecord {
    pub fn new(server_id: impl Into<String>) -> Self {
        Self {
            record_type: tags::HEADER_STR,
            server_id: server_id.into(),
        }
    }

    /// Always `"H"`
    pub fn record_type(&self) -> &str {
        self.record_type
    }

    pub fn server_id(&self) -> &str {
        &self.server_id
    }
}

/// One device inventory entry (`R|IMEI1|IMEI2|SerialNo|DeviceName`)
///
/// Values are kept exactly as they appeared in the file. No IMEI checksum or
/// format validation is applied and duplicates across records are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    record_type: &'static str,
    imei1: String,
    imei2: String,
    serial_no: String,
    device_name: String,
}

impl DeviceRecord {
    pub fn new(
        imei1: impl Into<String>,
        imei2: impl Into<String>,
        serial_no: impl Into<String>,
        device_name: impl Into<String>,
    ) -> Self {
        Self {
            record_type: tags::RECORD_STR,
            imei1: imei1.into(),
            imei2: imei2.into(),
            serial_no: serial_no.into(),
            device_name: device_name.into(),
        }
    }

    /// Always `"R"`
    pub fn record_type(&self) -> &str {
        self.record_type
    }

    pub fn imei1(&self) -> &str {
        &self.imei1
    }

    pub fn imei2(&self) -> &str {
        &self.imei2
    }

    pub fn serial_no(&self) -> &str {
        &self.serial_no
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}

/// Document trailer declaring the number of device records (`T|Count`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailerRecord {
    record_type: &'static str,
    count: usize,
}

impl TrailerRecord {
    pub fn new(count: usize) -> Self {
        Self {
            record_type: tags::TRAILER_STR,
            count,
        }
    }

    /// Always `"T"`
    pub fn record_type(&self) -> &str {
        self.record_type
    }

    /// Number of device records the trailer declares
    pub fn count(&self) -> usize {
        self.count
    }
}

// =============================================================================
// Device Report Aggregate
// =============================================================================

/// Fully validated device inventory report
///
/// A value of this type always satisfies `trailer.count() == device_details.len()`:
/// the only way to build one is [`DeviceReport::new`], which checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReport {
    header: HeaderRecord,
    device_details: Vec<DeviceRecord>,
    trailer: TrailerRecord,
}

impl DeviceReport {
    /// Assemble a report, enforcing the trailer count invariant
    pub fn new(
        header: HeaderRecord,
        device_details: Vec<DeviceRecord>,
        trailer: TrailerRecord,
    ) -> Result<Self, ReportError> {
        if trailer.count() != device_details.len() {
            return Err(ReportError::RecordCountMismatch {
                declared: trailer.count(),
                actual: device_details.len(),
            });
        }

        Ok(Self {
            header,
            device_details,
            trailer,
        })
    }

    pub fn header(&self) -> &HeaderRecord {
        &self.header
    }

    /// Device records in input order
    pub fn device_details(&self) -> &[DeviceRecord] {
        &self.device_details
    }

    pub fn trailer(&self) -> &TrailerRecord {
        &self.trailer
    }

    /// Number of device records (equal to the trailer count)
    pub fn len(&self) -> usize {
        self.device_details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.device_details.is_empty()
    }

    /// Consume the report and return its parts
    pub fn into_parts(self) -> (HeaderRecord, Vec<DeviceRecord>, TrailerRecord) {
        (self.header, self.device_details, self.trailer)
    }
}
