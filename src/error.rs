use crate::model::ProblemKind;
use calamine::{XlsError, XlsxError};
use std::path::PathBuf;
use thiserror::Error;

/// Failure while scanning a single file.
///
/// Never leaves a handler: it is turned into a [`ProblemKind`] at the
/// per-file boundary.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pdf(#[from] lopdf::Error),

    #[error("{0}")]
    Docx(#[from] docx_rs::ReaderError),

    #[error("{0}")]
    Xlsx(#[from] XlsxError),

    #[error("{0}")]
    Xls(#[from] XlsError),

    #[error("document has no pages")]
    EmptyDocument,
}

impl ScanError {
    pub fn into_problem_kind(self) -> ProblemKind {
        match self {
            ScanError::EmptyDocument => ProblemKind::CorruptOrEmpty,
            other => ProblemKind::ParseFailure(other.to_string()),
        }
    }
}

/// Failure that aborts a whole scan
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_maps_to_corrupt() {
        assert_eq!(
            ScanError::EmptyDocument.into_problem_kind(),
            ProblemKind::CorruptOrEmpty
        );
    }

    #[test]
    fn test_io_error_keeps_reason() {
        let err = ScanError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        assert_eq!(
            err.into_problem_kind(),
            ProblemKind::ParseFailure("missing file".to_string())
        );
    }
}
