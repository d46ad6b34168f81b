//! # Cart Parser CLI
//!
//! Validates cart files and prints their totals.
//!
//! ## Usage
//! ```bash
//! # Report every problem in a file (exit code 1 if any)
//! cart-parser validate samples/cart.csv
//!
//! # Total a valid file
//! cart-parser total samples/cart.csv
//!
//! # List items as JSON
//! cart-parser --format json items samples/cart.csv
//!
//! # Verbose logging
//! cart-parser --log debug total samples/cart.csv
//! ```
//!
//! Logs go to stderr so report output on stdout stays machine-readable.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use cart_parser::{CartParser, CliConfig, OutputFormat, ParseError, ValidationReport};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cart-parser")]
#[command(about = "Validate shopping cart files and compute their totals")]
struct Cli {
    /// Report format (overrides CART_PARSER_FORMAT)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Tracing filter, e.g. `debug` (overrides CART_PARSER_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every validation error in a file
    Validate { file: PathBuf },
    /// Print the item count and total of a valid file
    Total { file: PathBuf },
    /// Print every item of a valid file and the total
    Items { file: PathBuf },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::load().context("Failed to load configuration")?;

    let format = cli.format.unwrap_or(config.format);
    init_tracing(cli.log.as_deref().unwrap_or(&config.log_filter));
    debug!(?format, "Configuration loaded");

    let parser = CartParser::new();

    match cli.command {
        Commands::Validate { file } => {
            let errors = parser.validate_file(&file)?;
            let report = ValidationReport::new(&file, errors);
            println!("{}", report.render(format)?);

            Ok(if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Total { file } => match parser.parse_cart(&file) {
            Ok(summary) => {
                println!("{}", summary.render_total(format)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => report_failure(err, &file, format),
        },
        Commands::Items { file } => match parser.parse_cart(&file) {
            Ok(summary) => {
                println!("{}", summary.render_items(format)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => report_failure(err, &file, format),
        },
    }
}

/// Prints the validation report of a rejected file to stderr.
///
/// Read failures are not reports; they propagate as errors.
fn report_failure(err: ParseError, file: &Path, format: OutputFormat) -> Result<ExitCode> {
    match err {
        ParseError::Validation { errors, .. } => {
            let report = ValidationReport::new(file, errors);
            eprintln!("{}", report.render(format)?);
            Ok(ExitCode::FAILURE)
        }
        read @ ParseError::Read { .. } => Err(read.into()),
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
