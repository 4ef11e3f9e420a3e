//! UUID candidate validation.
//!
//! Extraction yields regex-captured candidates that are UUID-shaped but not
//! yet confirmed. Validation is a pure check: callers collapse every defect
//! to "invalid" and discard the candidate silently, so nothing here returns
//! a fatal error. The defect kinds are enumerated anyway so rejected
//! candidates can be logged with a reason.

use uuid::Uuid;

/// Why a candidate failed UUID validation.
///
/// The hyphenated canonical form is 32 hex digits grouped 8-4-4-4-12, 36
/// characters total with hyphens at offsets 8, 13, 18 and 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidDefect {
    /// Candidate is not 36 characters long.
    WrongLength { len: usize },
    /// A hyphen is missing or misplaced.
    MalformedGrouping { offset: usize },
    /// A non-hex character appears where a hex digit is required.
    InvalidHexDigit { offset: usize },
}

impl std::fmt::Display for UuidDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { len } => write!(f, "wrong length: {len} (expected 36)"),
            Self::MalformedGrouping { offset } => {
                write!(f, "malformed grouping at offset {offset}")
            }
            Self::InvalidHexDigit { offset } => {
                write!(f, "invalid hex digit at offset {offset}")
            }
        }
    }
}

/// Offsets of the four group separators in the canonical form.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Canonical hyphenated UUID length.
const CANONICAL_LEN: usize = 36;

/// Check whether a candidate string is a syntactically valid UUID.
///
/// Accepts any version/variant; standard UUID parsing rules apply. This is
/// the single source of truth used by extraction.
#[must_use]
pub fn is_valid_user_id(candidate: &str) -> bool {
    Uuid::parse_str(candidate).is_ok()
}

/// Classify why a candidate fails the canonical hyphenated form.
///
/// Only used for diagnostics on rejected candidates; [`is_valid_user_id`]
/// decides acceptance. Returns `Ok(())` for candidates in canonical form.
pub fn classify(candidate: &str) -> Result<(), UuidDefect> {
    let bytes = candidate.as_bytes();
    if bytes.len() != CANONICAL_LEN {
        return Err(UuidDefect::WrongLength { len: bytes.len() });
    }
    for (offset, &byte) in bytes.iter().enumerate() {
        if HYPHEN_OFFSETS.contains(&offset) {
            if byte != b'-' {
                return Err(UuidDefect::MalformedGrouping { offset });
            }
        } else if byte == b'-' {
            return Err(UuidDefect::MalformedGrouping { offset });
        } else if !byte.is_ascii_hexdigit() {
            return Err(UuidDefect::InvalidHexDigit { offset });
        }
    }
    Ok(())
}
