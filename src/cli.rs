//! Command-line interface for phone-backfill
//!
//! This module provides argument parsing and the top-level `run()` that the
//! binary calls. `run()` owns all user-facing output: the two progress
//! lines on stdout, diagnostics on stderr, and the exit-code mapping.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::exit_codes::ExitCode;
use crate::{backfill, logging};

/// phone-backfill - SQL user backfill with synthetic phone numbers
#[derive(Parser, Debug)]
#[command(name = "phone-backfill")]
#[command(about = "Extracts user UUIDs from a SQL dump and emits INSERT statements with unique phone numbers")]
#[command(long_about = r#"
phone-backfill scans a SQL dump for UUID-formatted user identifiers,
assigns each a synthetic phone number (0912 + 7 random digits, unique
within the run), and writes one INSERT statement per user.

EXAMPLES:
  # Read prediction.sql, write insert_users.sql (the defaults)
  phone-backfill

  # Explicit paths
  phone-backfill --input dump.sql --output users.sql

  # Count users without writing anything
  phone-backfill --dry-run

OUTPUT:
  One line per discovered user, sorted by user ID:
  INSERT INTO users (id, phone) VALUES ('<uuid>', '0912XXXXXXX');
"#)]
#[command(version)]
pub struct Cli {
    /// SQL dump to scan for user IDs
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination file for the generated INSERT statements
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Scan and report the user count without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve CLI arguments into a run configuration.
    #[must_use]
    pub fn to_config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone(),
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

/// Parse arguments, execute the pipeline, and report the outcome.
///
/// Returns `Err(ExitCode)` instead of exiting so main.rs stays a one-liner
/// and tests can drive the full flow in-process.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();
    run_with(&cli.to_config())
}

/// Execute a run for an already-resolved configuration.
pub fn run_with(config: &Config) -> Result<(), ExitCode> {
    // Ignore the error from a second init; tests share one process.
    let _ = logging::init_tracing(config.verbose);

    match backfill::run(config) {
        Ok(report) => {
            println!("Number of users found: {}", report.user_count);
            if !report.dry_run {
                println!(
                    "{} file created with {} users and unique phone numbers!",
                    report.output_path.display(),
                    report.user_count
                );
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}");
            Err(err.to_exit_code())
        }
    }
}
