use crate::entry::ScanEntry;
use crate::error::ReportError;
use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;
use tracing::warn;

/// List the regular files directly inside `path`, sorted by name.
///
/// Subdirectories are skipped, not descended into. Failing to open the
/// directory itself is the only error; unreadable entries are logged and
/// skipped.
pub fn read_scan_directory(path: &Path) -> Result<Vec<ScanEntry>, ReportError> {
    let read_dir = fs::read_dir(path).map_err(|source| ReportError::Directory {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<ScanEntry> = read_dir
        .filter_map(|entry| listed_entry(path, entry))
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn listed_entry(directory: &Path, entry: io::Result<DirEntry>) -> Option<ScanEntry> {
    match entry {
        Ok(entry) => ScanEntry::from_path(entry.path()),
        Err(e) => {
            warn!(directory = %directory.display(), error = %e, "skipping unreadable entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_only_sorted() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("b.txt"), b"").expect("Failed to write file");
        fs::write(dir.path().join("a.pdf"), b"").expect("Failed to write file");
        fs::create_dir(dir.path().join("sub")).expect("Failed to create dir");
        fs::write(dir.path().join("sub").join("c.txt"), b"").expect("Failed to write file");

        let entries = read_scan_directory(dir.path()).expect("listing");
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.txt"]);
    }

    #[test]
    fn test_unreadable_entry_is_skipped() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let failed = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(listed_entry(dir.path(), failed).is_none());

        fs::write(dir.path().join("a.txt"), b"x").expect("Failed to write file");
        let entry = fs::read_dir(dir.path())
            .expect("Failed to read dir")
            .next()
            .expect("one entry");
        let listed = listed_entry(dir.path(), entry).expect("regular file listed");
        assert_eq!(listed.name, "a.txt");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("nope");
        let err = read_scan_directory(&missing).expect_err("should fail");
        assert!(matches!(err, ReportError::Directory { .. }));
    }
}
