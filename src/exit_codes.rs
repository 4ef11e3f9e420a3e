//! Exit code constants and error mapping for phone-backfill.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Operation completed successfully |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments |
//! | 3 | `INPUT_READ` | Input SQL file could not be read |
//! | 4 | `OUTPUT_WRITE` | Output SQL file could not be written |
//! | 5 | `PHONE_SPACE_EXHAUSTED` | Phone number suffix space exhausted |

/// Exit codes matching the documented exit code table.
///
/// Use the named constants for common exit codes, or
/// [`as_i32()`](Self::as_i32) to get the numeric value for
/// `std::process::exit()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - operation completed successfully
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - general failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid or missing command-line arguments
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Input read error - the input SQL file could not be opened or read
    pub const INPUT_READ: ExitCode = ExitCode(3);

    /// Output write error - the output SQL file could not be written
    pub const OUTPUT_WRITE: ExitCode = ExitCode(4);

    /// Phone space exhausted - more users than available phone suffixes
    pub const PHONE_SPACE_EXHAUSTED: ExitCode = ExitCode(5);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an `ExitCode` from a raw i32 value.
    ///
    /// Prefer using the named constants when possible.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}
