//! Command-line argument definitions for the device report tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::STDIN_MARKER;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the device report parser
///
/// Parses pipe-delimited device inventory reports and converts them to JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "device-report",
    version,
    about = "Parse pipe-delimited device inventory reports into JSON",
    long_about = "Reads a device inventory report made of one H|ServerID header line, \
                  any number of R|IMEI1|IMEI2|SerialNo|DeviceName record lines and one \
                  T|Count trailer line, validates its structure and writes the report as JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a report and write it as JSON
    Parse(ParseArgs),
    /// Check a report and print a summary without writing JSON
    Validate(ValidateArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Reject records before the header and anything after the trailer
    #[arg(long = "strict-order")]
    pub strict_order: bool,

    /// Path to configuration file (JSON)
    ///
    /// If not specified, looks for <config dir>/device-report/config.json
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Report file to read ("-" or omitted for stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write JSON to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON instead of indented output
    #[arg(long = "compact")]
    pub compact: bool,

    /// Overwrite the output file if it already exists
    #[arg(long = "force")]
    pub force_overwrite: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Report file to read ("-" or omitted for stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommonArgs {
    /// Log level implied by -v / -q, if either was given
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }

        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }
}

/// Resolve an INPUT argument; `None` means stdin
pub fn input_path(input: &Option<PathBuf>) -> Option<&PathBuf> {
    input
        .as_ref()
        .filter(|path| path.as_os_str() != STDIN_MARKER)
}

fn validate_input(input: &Option<PathBuf>) -> Result<()> {
    if let Some(path) = input_path(input) {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        if !path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)?;
        self.common.validate()?;

        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is a directory: {}",
                    output.display()
                )));
            }

            if output.exists() && !self.force_overwrite {
                return Err(Error::output_exists(output.display().to_string()));
            }
        }

        Ok(())
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)?;
        self.common.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_parse_command_arguments() {
        let args = Args::try_parse_from([
            "device-report",
            "parse",
            "report.txt",
            "-o",
            "out.json",
            "--compact",
            "--strict-order",
            "-vv",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Parse(parse)) => {
                assert_eq!(parse.input, Some(PathBuf::from("report.txt")));
                assert_eq!(parse.output, Some(PathBuf::from("out.json")));
                assert!(parse.compact);
                assert!(!parse.force_overwrite);
                assert!(parse.common.strict_order);
                assert_eq!(parse.common.get_log_level(), Some("debug"));
            }
            other => panic!("Expected parse command, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_command_defaults() {
        let args = Args::try_parse_from(["device-report", "validate"]).unwrap();

        match args.command {
            Some(Commands::Validate(validate)) => {
                assert!(validate.input.is_none());
                assert!(!validate.common.strict_order);
                assert_eq!(validate.common.get_log_level(), None);
            }
            other => panic!("Expected validate command, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["device-report"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["device-report", "validate", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stdin_marker() {
        assert!(input_path(&None).is_none());
        assert!(input_path(&Some(PathBuf::from("-"))).is_none());
        assert_eq!(
            input_path(&Some(PathBuf::from("a.txt"))),
            Some(&PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn test_parse_args_validation() {
        let input = NamedTempFile::new().unwrap();
        let existing_output = NamedTempFile::new().unwrap();
        let temp_dir = TempDir::new().unwrap();

        let base = ParseArgs {
            input: Some(input.path().to_path_buf()),
            output: None,
            compact: false,
            force_overwrite: false,
            common: CommonArgs {
                strict_order: false,
                config_file: None,
                verbose: 0,
                quiet: false,
            },
        };
        assert!(base.validate().is_ok());

        let missing_input = ParseArgs {
            input: Some(temp_dir.path().join("missing.txt")),
            ..base.clone()
        };
        assert!(matches!(
            missing_input.validate(),
            Err(Error::FileNotFound { .. })
        ));

        let dir_input = ParseArgs {
            input: Some(temp_dir.path().to_path_buf()),
            ..base.clone()
        };
        assert!(matches!(
            dir_input.validate(),
            Err(Error::Configuration { .. })
        ));

        let clobber = ParseArgs {
            output: Some(existing_output.path().to_path_buf()),
            ..base.clone()
        };
        assert!(matches!(clobber.validate(), Err(Error::OutputExists { .. })));

        let forced = ParseArgs {
            output: Some(existing_output.path().to_path_buf()),
            force_overwrite: true,
            ..base.clone()
        };
        assert!(forced.validate().is_ok());

        let missing_config = ParseArgs {
            common: CommonArgs {
                config_file: Some(temp_dir.path().join("config.json")),
                ..base.common.clone()
            },
            ..base
        };
        assert!(matches!(
            missing_config.validate(),
            Err(Error::Configuration { .. })
        ));
    }
}
