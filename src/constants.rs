//! Application constants for the device report parser
//!
//! This module contains the record grammar constants, default values and
//! environment variable names used throughout the crate.

// =============================================================================
// Record Grammar
// =============================================================================

/// Field delimiter for every record line
pub const FIELD_DELIMITER: char = '|';

/// Record type tags as they appear in the first field of a line
pub mod tags {
    /// Document header (exactly one per report)
    pub const HEADER: char = 'H';

    /// Device inventory entry (zero or more per report)
    pub const RECORD: char = 'R';

    /// Document trailer carrying the declared record count (exactly one)
    pub const TRAILER: char = 'T';

    pub const HEADER_STR: &str = "H";
    pub const RECORD_STR: &str = "R";
    pub const TRAILER_STR: &str = "T";
}

/// Exact number of `|`-separated fields for each line type
pub mod arity {
    pub const HEADER: usize = 2;
    pub const RECORD: usize = 5;
    pub const TRAILER: usize = 2;
}

/// Human-readable line shapes used in malformed-line diagnostics
pub mod shapes {
    pub const HEADER: &str = "H|ServerID";
    pub const RECORD: &str = "R|IMEI1|IMEI2|SerialNo|DeviceName";
    pub const TRAILER: &str = "T|Count";
}

// =============================================================================
// CLI / Configuration Defaults
// =============================================================================

/// Application directory name under the user config directory
pub const APP_DIR_NAME: &str = "device-report";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Input path that means "read from stdin"
pub const STDIN_MARKER: &str = "-";

/// Default log level when neither CLI nor config set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted log level names
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Environment variable overriding the ordering policy (`permissive` / `strict`)
pub const ENV_ORDERING: &str = "DEVICE_REPORT_ORDERING";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "DEVICE_REPORT_LOG_LEVEL";
