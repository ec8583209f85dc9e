//! JSON rendering for validated device reports

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

use crate::app::models::DeviceReport;
use crate::{Error, Result};

/// Output layout for rendered JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Four-space indented, one field per line
    #[default]
    Pretty,
    /// Single line, no whitespace
    Compact,
}

impl JsonStyle {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }
}

/// Render a report to a JSON string
pub fn render_json(report: &DeviceReport, style: JsonStyle) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(report, style, &mut buffer)?;

    String::from_utf8(buffer)
        .map_err(|e| Error::io_error(format!("Rendered JSON is not UTF-8: {}", e)))
}

/// Write a report as JSON to `writer`
pub fn write_json<W: Write>(report: &DeviceReport, style: JsonStyle, writer: W) -> Result<()> {
    match style {
        JsonStyle::Pretty => {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut serializer = Serializer::with_formatter(writer, formatter);
            report
                .serialize(&mut serializer)
                .map_err(|e| Error::serialization("Failed to write report JSON", e))
        }
        JsonStyle::Compact => serde_json::to_writer(writer, report)
            .map_err(|e| Error::serialization("Failed to write report JSON", e)),
    }
}
