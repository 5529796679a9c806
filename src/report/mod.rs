mod directory;
mod render;
mod scanner;

pub use directory::read_scan_directory;
pub use scanner::{generate_report, ReportSummary, ScanReport, Scanner};
