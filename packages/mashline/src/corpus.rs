//! Loading of line-delimited text inputs.

use std::fs;
use std::path::Path;

use crate::error::{MashlineError, Result};

/// Read a line-delimited text file into trimmed, non-blank lines.
///
/// Line order is preserved. Blank lines carry no words and can never match a
/// separator, so they are dropped at load time.
///
/// # Errors
/// `MashlineError::Io` carrying the offending path if the file cannot be
/// read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| MashlineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Reject an empty collection at the boundary, before the splicer runs.
///
/// `what` names the input in the error message ("lines file" or
/// "separators file").
pub fn ensure_non_empty(lines: &[String], what: &'static str) -> Result<()> {
    if lines.is_empty() {
        Err(MashlineError::EmptyInput { what })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_read_lines_trims_and_preserves_order() {
        let file = write_temp("  first line \nsecond line\n\tthird line\n");
        let lines = read_lines(file.path()).expect("readable file");
        assert_eq!(lines, vec!["first line", "second line", "third line"]);
    }

    #[test]
    fn test_read_lines_drops_blank_lines() {
        let file = write_temp("one\n\n   \ntwo\n");
        let lines = read_lines(file.path()).expect("readable file");
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let err = read_lines(Path::new("/no/such/file.txt"));
        assert!(matches!(err, Err(MashlineError::Io { .. })));
    }

    #[test]
    fn test_ensure_non_empty() {
        assert!(ensure_non_empty(&["a".to_string()], "lines file").is_ok());
        assert!(matches!(
            ensure_non_empty(&[], "lines file"),
            Err(MashlineError::EmptyInput { what: "lines file" })
        ));
    }
}
