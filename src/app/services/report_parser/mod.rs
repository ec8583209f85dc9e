//! Parser for pipe-delimited device inventory reports
//!
//! A report is a sequence of `|`-delimited lines tagged by their first
//! character:
//!
//! ```text
//! H|<serverId>
//! R|<imei1>|<imei2>|<serialNo>|<deviceName>
//! T|<count>
//! ```
//!
//! ## Architecture
//!
//! - [`decoders`] - line classification and the header/record/trailer decoders
//! - [`lines`] - line splitting on `\n`, `\r\n` and lone `\r`
//! - [`state`] - per-call accumulator, ordering policy and post-pass checks
//! - [`parser`] - `ReportParser` entry points over strings, readers and files
//! - [`error`] - the `ReportError` taxonomy
//! - [`stats`] - line accounting returned beside the report
//!
//! ## Usage
//!
//! ```rust
//! use device_report::app::services::report_parser::ReportParser;
//!
//! let report = ReportParser::new()
//!     .parse_str("H|SRV1\nR|111|222|SN1|DeviceA\nT|1")
//!     .unwrap();
//!
//! assert_eq!(report.header().server_id(), "SRV1");
//! assert_eq!(report.device_details().len(), 1);
//! ```

pub mod decoders;
pub mod error;
pub mod lines;
pub mod parser;
pub mod state;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use error::ReportError;
pub use parser::ReportParser;
pub use state::OrderingPolicy;
pub use stats::{ParseResult, ParseStats};
