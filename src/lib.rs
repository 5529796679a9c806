//! Multi-format text search.
//!
//! Scans the files of a directory (PDF, DOCX, XLSX/XLS, plain text) for a
//! list of terms and renders a plain text report of every occurrence,
//! every per-file problem and every ignored file.

pub mod config;
pub mod entry;
pub mod error;
pub mod model;
pub mod report;
pub mod scan;
pub mod search;

pub use error::{ConfigError, ReportError, ScanError};
pub use report::{generate_report, ReportSummary, ScanReport, Scanner};
pub use search::{parse_terms, ContextWidth, SearchMode, SearchRequest, SearchTerm};
