//! Device Report Library
//!
//! A Rust library for parsing pipe-delimited device inventory reports into
//! validated, serializable data structures.
//!
//! This library provides tools for:
//! - Classifying and decoding `H`/`R`/`T` report lines with strict arity checks
//! - Enforcing single header, single trailer and trailer count consistency
//! - Optional strict header-records-trailer ordering
//! - Rendering validated reports as pretty or compact JSON
//! - Layered configuration (file, environment, CLI)

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod json_output;
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DeviceRecord, DeviceReport, HeaderRecord, RecordKind, TrailerRecord};
pub use app::services::report_parser::{OrderingPolicy, ReportError, ReportParser};
pub use config::Config;

/// Result type alias for the device report crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The report content violated the format
    #[error("Report parse error: {0}")]
    Report(#[from] ReportError),

    /// JSON serialization or config deserialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Output file already exists and overwriting was not requested
    #[error("Output file already exists: {path} (use --force to overwrite)")]
    OutputExists { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an output exists error
    pub fn output_exists(path: impl Into<String>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// The underlying report error, if this is a format violation
    pub fn as_report_error(&self) -> Option<&ReportError> {
        match self {
            Self::Report(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
