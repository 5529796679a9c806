use std::fs;
use std::path::PathBuf;

/// A regular file found directly inside the scanned directory
#[derive(Clone, Debug)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub name: String,
    /// Lowercased, without the leading dot; empty when there is none
    pub extension: String,
    pub size: u64,
}

impl ScanEntry {
    /// Build an entry for `path`, following symlinks.
    ///
    /// Returns `None` for anything that is not a regular file.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let metadata = fs::metadata(&path).ok()?;
        if !metadata.is_file() {
            return None;
        }

        let name = path.file_name()?.to_string_lossy().to_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Some(Self {
            path,
            name,
            extension,
            size: metadata.len(),
        })
    }
}
