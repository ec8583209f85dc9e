use anyhow::Context;
use clap::Parser;
use device_report::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let result = commands::run(args).context("device-report failed");

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Device Report - Inventory Report Parser");
    println!("=======================================");
    println!();
    println!("Parse pipe-delimited device inventory reports and convert them to JSON.");
    println!();
    println!("USAGE:");
    println!("    device-report <COMMAND> [OPTIONS] [INPUT]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a report and write it as JSON");
    println!("    validate    Check a report and print a summary");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("INPUT FORMAT:");
    println!("    H|<serverId>");
    println!("    R|<imei1>|<imei2>|<serialNo>|<deviceName>");
    println!("    T|<count>");
    println!();
    println!("EXAMPLES:");
    println!("    # Pretty-print a report as JSON:");
    println!("    device-report parse sample_device_report.csv");
    println!();
    println!("    # Compact JSON from stdin into a file:");
    println!("    cat report.txt | device-report parse --compact -o report.json");
    println!();
    println!("    # Reject records outside the header/trailer:");
    println!("    device-report validate --strict-order report.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    device-report <COMMAND> --help");
}
