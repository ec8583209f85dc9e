//! Command implementations for the device report CLI
//!
//! This module contains command execution, configuration loading and
//! logging setup for the CLI interface.

use crate::app::services::json_output::{JsonStyle, write_json};
use crate::app::services::report_parser::{OrderingPolicy, ParseResult, ParseStats, ReportParser};
use crate::cli::args::{Args, Commands, CommonArgs, ParseArgs, ValidateArgs, input_path};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Main command runner
///
/// Returns the statistics of the parse pass on success. Running without a
/// subcommand is handled by the binary before this is called.
pub fn run(args: Args) -> Result<ParseStats> {
    match args.command {
        Some(Commands::Parse(parse_args)) => run_parse(parse_args),
        Some(Commands::Validate(validate_args)) => run_validate(validate_args),
        None => Err(Error::configuration("No command given")),
    }
}

/// Parse a report and write it as JSON
pub fn run_parse(args: ParseArgs) -> Result<ParseStats> {
    args.validate()?;

    let mut config = load_configuration(&args.common)?;
    setup_logging(&config.logging.level, args.common.quiet);

    info!("Starting device report parse");
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    if args.compact {
        config = config.with_compact_output();
    }

    let result = read_report(&args.input, &config)?;
    let style = JsonStyle::from_pretty(config.output.pretty);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
            let mut writer = BufWriter::new(file);
            write_json(&result.report, style, &mut writer)?;
            writeln!(writer)?;
            writer.flush()?;
            info!("Wrote JSON report to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_json(&result.report, style, &mut writer)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }

    Ok(result.stats)
}

/// Parse a report and print a summary
pub fn run_validate(args: ValidateArgs) -> Result<ParseStats> {
    args.validate()?;

    let config = load_configuration(&args.common)?;
    setup_logging(&config.logging.level, args.common.quiet);

    info!("Starting device report validation");
    debug!("Loaded configuration: {:?}", config);

    let source = input_label(&args.input);
    match read_report(&args.input, &config) {
        Ok(result) => {
            print_summary(&source, &result);
            Ok(result.stats)
        }
        Err(error) => {
            if let Some(report_error) = error.as_report_error() {
                println!(
                    "{} {} ({})",
                    "INVALID".red().bold(),
                    source,
                    report_error.kind_name()
                );
                if let Some(line_number) = report_error.line_number() {
                    println!("  {} {}", "Line:".bold(), line_number);
                }
            }
            Err(error)
        }
    }
}

/// Read and parse the report named by INPUT, or stdin
fn read_report(input: &Option<PathBuf>, config: &Config) -> Result<ParseResult> {
    let parser = ReportParser::from_config(&config.parser);

    match input_path(input) {
        Some(path) => parser.parse_file(path),
        None => {
            debug!("Reading report from stdin");
            let stdin = io::stdin();
            parser.parse_reader(stdin.lock())
        }
    }
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &CommonArgs) {
    if args.strict_order {
        config.parser.ordering = OrderingPolicy::Strict;
    }

    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
}

/// Set up structured logging on stderr
fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("device_report={}", log_level)));

    let initialized = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    match initialized {
        Ok(()) => debug!("Logging initialized at level: {}", log_level),
        Err(e) => warn!("Logging already initialized: {}", e),
    }
}

fn input_label(input: &Option<PathBuf>) -> String {
    match input_path(input) {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    }
}

fn print_summary(source: &str, result: &ParseResult) {
    let report = &result.report;

    println!("{} {}", "VALID".green().bold(), source);
    println!("  {} {}", "Server ID:".bold(), report.header().server_id());
    println!("  {} {}", "Device records:".bold(), report.len());
    println!("  {} {}", "Declared count:".bold(), report.trailer().count());
    println!(
        "  {} {} ({} blank)",
        "Lines read:".bold(),
        result.stats.lines_read,
        result.stats.blank_lines
    );
}
