//! Pipeline orchestration: extraction → issuance → output.
//!
//! One linear pass per run. Each stage emits a tracing event with its count
//! and the whole run reports its duration; the CLI layer owns the
//! user-facing stdout lines.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::config::Config;
use crate::error::BackfillError;
use crate::output;
use crate::phone::PhoneIssuer;
use crate::{extraction, phone};

/// Summary of a completed backfill run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillReport {
    /// Number of distinct validated user IDs found in the input.
    pub user_count: usize,
    /// Where the INSERT statements were (or would have been) written.
    pub output_path: PathBuf,
    /// Whether the run stopped after extraction without writing.
    pub dry_run: bool,
}

/// Execute one backfill run.
///
/// Reads the input dump, extracts and validates user IDs, issues one unique
/// phone number per ID in sorted ID order, and atomically writes the output
/// file. In dry-run mode the pipeline stops after extraction.
pub fn run(config: &Config) -> Result<BackfillReport, BackfillError> {
    let started = Instant::now();

    let user_ids = extraction::extract_user_ids_from_file(&config.input)?;
    info!(
        count = user_ids.len(),
        input = %config.input.display(),
        "extracted user ids"
    );

    let report = BackfillReport {
        user_count: user_ids.len(),
        output_path: config.output.clone(),
        dry_run: config.dry_run,
    };

    if config.dry_run {
        info!("dry run, skipping phone issuance and output");
        return Ok(report);
    }

    let mut issuer = PhoneIssuer::new();
    let records = issuer.assign(&user_ids)?;
    info!(count = records.len(), prefix = phone::PHONE_PREFIX, "issued phone numbers");

    output::write_output(&config.output, &records)?;
    info!(
        output = %config.output.display(),
        duration_ms = started.elapsed().as_millis() as u64,
        "backfill complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            input: dir.join("prediction.sql"),
            output: dir.join("insert_users.sql"),
            dry_run: false,
            verbose: false,
        }
    }

    #[test]
    fn run_reports_count_and_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(
            &config.input,
            "INSERT INTO foo (name, id) VALUES ('Alice', 'a1b2c3d4-e5f6-7890-abcd-ef1234567890');\n",
        )
        .unwrap();

        let report = run(&config).unwrap();

        assert_eq!(report.user_count, 1);
        assert!(!report.dry_run);
        assert!(config.output.exists());
    }

    #[test]
    fn dry_run_does_not_touch_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.dry_run = true;
        fs::write(
            &config.input,
            "VALUES ('Alice', 'a1b2c3d4-e5f6-7890-abcd-ef1234567890')",
        )
        .unwrap();

        let report = run(&config).unwrap();

        assert_eq!(report.user_count, 1);
        assert!(report.dry_run);
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let err = run(&config).unwrap_err();
        assert!(matches!(err, BackfillError::InputRead { .. }));
        assert!(!config.output.exists());
    }
}
