//! User ID extraction from SQL dumps.
//!
//! # Design Philosophy
//!
//! Extraction favors recall over precision: two overlapping regex patterns
//! scan the full dump text, their captures are unioned, and every candidate
//! is then confirmed by [`crate::validation`]. The patterns intentionally
//! stay separate rather than being unified; set semantics deduplicate any
//! overlap between them.
//!
//! - Pattern A anchors on the `VALUES` keyword and requires the strict
//!   8-4-4-4-12 hex grouping in the second quoted field.
//! - Pattern B matches any parenthesized tuple whose second quoted field is
//!   36 characters of hex digits and hyphens, catching multi-row inserts
//!   where continuation tuples are not preceded by `VALUES`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::BackfillError;
use crate::validation;

/// Pattern A: `VALUES ('...', '<uuid>'` with strict canonical grouping.
static VALUES_TUPLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)VALUES\s*\(\s*'[^']+',\s*'([a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12})'",
    )
    .unwrap()
});

/// Pattern B: `('...', '<36 hex-or-hyphen chars>'` for bare tuples.
static BARE_TUPLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(\s*'[^']+',\s*'([a-f0-9-]{36})'").unwrap());

/// Extract the set of distinct, validated user IDs from SQL text.
///
/// Runs both patterns over the full text, unions the captures, and keeps
/// only candidates that pass UUID validation. Invalid candidates are
/// discarded silently (logged at debug level with the defect kind).
///
/// The returned set is sorted, which fixes the output order of the run.
#[must_use]
pub fn extract_user_ids(sql: &str) -> BTreeSet<String> {
    let mut user_ids = BTreeSet::new();

    for re in [&*VALUES_TUPLE_RE, &*BARE_TUPLE_RE] {
        for captures in re.captures_iter(sql) {
            let candidate = &captures[1];
            if validation::is_valid_user_id(candidate) {
                user_ids.insert(candidate.to_string());
            } else if let Err(defect) = validation::classify(candidate) {
                debug!(candidate = %candidate, defect = %defect, "rejected candidate");
            }
        }
    }

    user_ids
}

/// Read a SQL file and extract its validated user IDs.
///
/// A file that cannot be read is the only fatal condition here; the error
/// carries the path and propagates to the caller.
pub fn extract_user_ids_from_file(path: &Path) -> Result<BTreeSet<String>, BackfillError> {
    let content = fs::read_to_string(path).map_err(|source| BackfillError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_user_ids(&content))
}
