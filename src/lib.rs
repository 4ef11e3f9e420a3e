//! phone-backfill - SQL user backfill with synthetic phone numbers
//!
//! This crate scans a SQL dump for UUID-formatted user identifiers, assigns
//! each a randomly generated phone number that is unique within the run, and
//! writes one `INSERT INTO users (id, phone) VALUES (...)` statement per user.
//!
//! phone-backfill can be used in two ways:
//! - **CLI**: run `phone-backfill` in a directory containing `prediction.sql`
//! - **Library**: call [`backfill::run`] with a [`Config`] to embed the
//!   pipeline in another tool
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # Defaults: reads prediction.sql, writes insert_users.sql
//! phone-backfill
//!
//! # Explicit paths and a scan-only pass
//! phone-backfill --input dump.sql --output users.sql
//! phone-backfill --dry-run --verbose
//! ```
//!
//! # Pipeline
//!
//! Extraction → validation → phone issuance → output, fully sequential:
//!
//! 1. [`extraction`] pulls candidate UUIDs out of the dump with two regex
//!    patterns and keeps only candidates that pass [`validation`].
//! 2. [`phone::PhoneIssuer`] assigns each ID a `0912` + 7-digit number,
//!    regenerating on collision so phones are pairwise distinct per run.
//! 3. [`output`] renders the INSERT statements and atomically overwrites
//!    the output file.
//!
//! # Stable Public API
//!
//! - [`Config`] - input/output paths and run options
//! - [`BackfillError`] - library error type with exit-code mapping
//! - [`ExitCode`] - CLI exit codes
//! - [`BackfillReport`] - summary returned by [`backfill::run`]
//!
//! Library code returns [`BackfillError`] and does NOT call
//! `std::process::exit()`; only the CLI maps errors to exit codes.

pub use crate::backfill::BackfillReport;
pub use crate::config::Config;
pub use crate::error::BackfillError;
pub use crate::exit_codes::ExitCode;
pub use crate::phone::{PhoneIssuer, PhoneRecord};

pub mod backfill;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod extraction;
pub mod logging;
pub mod output;
pub mod phone;
pub mod validation;
