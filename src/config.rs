//! Run configuration with CLI-over-defaults precedence.
//!
//! Configuration is deliberately small: two file paths and two switches.
//! Defaults reproduce the zero-argument behavior of the original backfill
//! job (`prediction.sql` in, `insert_users.sql` out, in the working
//! directory).

use std::path::PathBuf;

/// Default input file read from the working directory.
pub const DEFAULT_INPUT: &str = "prediction.sql";

/// Default output file written to the working directory.
pub const DEFAULT_OUTPUT: &str = "insert_users.sql";

/// Configuration for a backfill run.
///
/// Precedence: CLI flags > built-in defaults. There is no config file or
/// environment surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQL dump to scan for user IDs.
    pub input: PathBuf,
    /// Destination for the generated INSERT statements.
    pub output: PathBuf,
    /// Scan and report the user count without writing any file.
    pub dry_run: bool,
    /// Enable verbose diagnostic logging.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
            verbose: false,
        }
    }
}
