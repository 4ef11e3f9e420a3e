//! Library-level error type with exit-code mapping.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Errors returned by phone-backfill library operations.
///
/// An input read failure is the only fatal condition in normal operation;
/// the other variants cover the output path and the theoretical limit of
/// the phone suffix space.
///
/// # Exit Code Mapping
///
/// | Variant | Exit Code |
/// |---------|-----------|
/// | `InputRead` | 3 |
/// | `OutputWrite` | 4 |
/// | `PhoneSpaceExhausted` | 5 |
/// | `Io` | 1 |
#[derive(Error, Debug)]
pub enum BackfillError {
    #[error("failed to read input file {path}: {source}")]
    InputRead { path: PathBuf, source: io::Error },

    #[error("failed to write output file {path}: {source}")]
    OutputWrite { path: PathBuf, source: io::Error },

    #[error("phone number space exhausted: all {capacity} suffixes issued")]
    PhoneSpaceExhausted { capacity: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl BackfillError {
    /// Map this error to a CLI exit code.
    ///
    /// Library code never calls `std::process::exit()`; the CLI uses this
    /// mapping to terminate with the documented code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::InputRead { .. } => ExitCode::INPUT_READ,
            Self::OutputWrite { .. } => ExitCode::OUTPUT_WRITE,
            Self::PhoneSpaceExhausted { .. } => ExitCode::PHONE_SPACE_EXHAUSTED,
            Self::Io(_) => ExitCode::INTERNAL,
        }
    }
}
