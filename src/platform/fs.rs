// TextFilter - platform/fs.rs
//
// Filesystem helpers for the filter-export operation.
// Every handle opened here is scoped to the function that opens it and is
// closed on return, success or failure.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// True if `path` resolves (following symlinks) to an existing regular file.
///
/// Any metadata error counts as "not a file": the caller reports it as a
/// missing file rather than an I/O failure.
pub fn is_regular_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Source metadata unavailable");
            false
        }
    }
}

/// Make `path` absolute against the current working directory without
/// touching the filesystem or resolving symlinks.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path)
}

/// Read the whole file as strict UTF-8 lines.
///
/// Lines are split on LF; a CR directly before the LF is dropped. A final
/// unterminated line is kept and a trailing LF does not add an empty line.
/// Invalid UTF-8 fails with `ErrorKind::InvalidData`.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    reader.lines().collect()
}

/// Create (or truncate) the file at `path` for writing.
pub fn create_output(path: &Path) -> io::Result<File> {
    File::create(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_lines_lf_and_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.txt");
        fs::write(&path, "one\r\ntwo\nthree").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_read_lines_trailing_newline_adds_no_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        fs::write(&path, "a\nb\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_read_lines_lone_cr_is_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cr.txt");
        fs::write(&path, "a\rb\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["a\rb"]);
    }

    #[test]
    fn test_read_lines_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_lines_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, [b'o', b'k', b'\n', 0xff, 0xfe, b'\n']).unwrap();
        let err = read_lines(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_is_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, "x").unwrap();
        assert!(is_regular_file(&path));
        assert!(!is_regular_file(dir.path()));
        assert!(!is_regular_file(&dir.path().join("missing.txt")));
    }

    #[test]
    fn test_absolute_path_of_relative() {
        let abs = absolute_path(Path::new("some/file.txt")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/file.txt"));
    }
}
