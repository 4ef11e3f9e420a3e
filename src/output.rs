//! INSERT statement rendering and atomic output writing.
//!
//! The output file is written via temp file + fsync + rename so a failed
//! run never leaves a half-written `insert_users.sql` behind. An existing
//! file at the target path is overwritten.
//!
//! No escaping is applied to the substituted values: user IDs are validated
//! UUIDs and phones are digit strings, neither of which can contain a quote.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::BackfillError;
use crate::phone::PhoneRecord;

/// Render one INSERT line per record, each terminated by a newline.
#[must_use]
pub fn render_insert_statements(records: &[PhoneRecord]) -> String {
    let mut sql = String::new();
    for record in records {
        sql.push_str(&format!(
            "INSERT INTO users (id, phone) VALUES ('{}', '{}');\n",
            record.user_id, record.phone
        ));
    }
    sql
}

/// Write the rendered statements to `path`, replacing any existing file.
///
/// Content is staged in a temp file in the target directory, synced, then
/// renamed into place.
pub fn write_output(path: &Path, records: &[PhoneRecord]) -> Result<(), BackfillError> {
    let content = render_insert_statements(records);
    write_atomic(path, &content).map_err(|source| BackfillError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    // A bare file name has an empty parent; stage in the working directory.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(user_id: &str, phone: &str) -> PhoneRecord {
        PhoneRecord {
            user_id: user_id.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn renders_exact_insert_shape() {
        let records = vec![record("a1b2c3d4-e5f6-7890-abcd-ef1234567890", "09123456789")];
        assert_eq!(
            render_insert_statements(&records),
            "INSERT INTO users (id, phone) VALUES ('a1b2c3d4-e5f6-7890-abcd-ef1234567890', '09123456789');\n"
        );
    }

    #[test]
    fn renders_empty_for_no_records() {
        assert_eq!(render_insert_statements(&[]), "");
    }

    #[test]
    fn renders_one_line_per_record() {
        let records = vec![
            record("00000000-0000-1111-2222-333344445555", "09120000001"),
            record("ffffffff-0000-1111-2222-333344445555", "09120000002"),
        ];
        let sql = render_insert_statements(&records);
        assert_eq!(sql.lines().count(), 2);
        assert!(sql.ends_with(";\n"));
    }

    #[test]
    fn write_output_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insert_users.sql");
        let records = vec![record("a1b2c3d4-e5f6-7890-abcd-ef1234567890", "09129999999")];

        write_output(&path, &records).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_insert_statements(&records));
    }

    #[test]
    fn write_output_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insert_users.sql");
        fs::write(&path, "stale content\n").unwrap();

        write_output(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_directory_reports_output_error() {
        let err = write_output(Path::new("missing-dir/out.sql"), &[]).unwrap_err();
        match err {
            BackfillError::OutputWrite { path, .. } => {
                assert!(path.ends_with("out.sql"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
