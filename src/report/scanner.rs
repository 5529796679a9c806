use super::directory::read_scan_directory;
use crate::error::ReportError;
use crate::model::{FileOutcome, Finding, Problem};
use crate::scan::HandlerRegistry;
use crate::search::{SearchMode, SearchRequest, SearchTerm};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Counters derived from a finished scan.
///
/// `selected == without_problems + with_problems + ignored` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub selected: usize,
    pub without_problems: usize,
    pub with_problems: usize,
    pub ignored: usize,
}

impl ReportSummary {
    pub fn processed(&self) -> usize {
        self.without_problems + self.with_problems
    }
}

/// Accumulated result of scanning one directory
#[derive(Clone, Debug)]
pub struct ScanReport {
    pub(super) terms: Vec<SearchTerm>,
    pub(super) mode: SearchMode,
    pub(super) supported_extensions: Vec<String>,
    findings: Vec<Finding>,
    problems: Vec<Problem>,
    problematic_files: BTreeSet<String>,
    ignored: Vec<String>,
    processed: usize,
}

impl ScanReport {
    fn new(request: &SearchRequest, supported_extensions: &[&str]) -> Self {
        Self {
            terms: request.terms.clone(),
            mode: request.mode,
            supported_extensions: supported_extensions.iter().map(|e| e.to_string()).collect(),
            findings: Vec::new(),
            problems: Vec::new(),
            problematic_files: BTreeSet::new(),
            ignored: Vec::new(),
            processed: 0,
        }
    }

    /// Fold the outcome of one supported file into the report
    fn record(mut self, file_name: &str, outcome: FileOutcome) -> Self {
        self.processed += 1;
        if outcome.is_problematic() {
            self.problematic_files.insert(file_name.to_string());
        }
        self.findings.extend(outcome.findings);
        self.problems.extend(outcome.problems);
        self
    }

    fn record_ignored(mut self, file_name: &str) -> Self {
        self.ignored.push(file_name.to_string());
        self
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Ignored file names, sorted lexicographically
    pub fn ignored_files(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ignored.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn summary(&self) -> ReportSummary {
        let with_problems = self.problematic_files.len();
        let ignored = self.ignored.len();
        ReportSummary {
            selected: self.processed + ignored,
            without_problems: self.processed - with_problems,
            with_problems,
            ignored,
        }
    }
}

/// Scans directories with a fixed set of handlers
pub struct Scanner {
    registry: HandlerRegistry,
}

impl Scanner {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Scan every file directly inside `directory`.
    ///
    /// Per-file failures end up in the report; only an unreadable directory
    /// is returned as an error.
    pub fn scan_directory(
        &self,
        directory: &Path,
        request: &SearchRequest,
    ) -> Result<ScanReport, ReportError> {
        info!(
            directory = %directory.display(),
            terms = request.terms.len(),
            "starting scan"
        );
        let entries = read_scan_directory(directory)?;

        let report = entries.iter().fold(
            ScanReport::new(request, self.registry.supported_extensions()),
            |report, entry| match self.registry.handler_for(&entry.extension) {
                Some(handler) => {
                    debug!(file = %entry.name, handler = handler.name(), "scanning file");
                    let outcome = handler.scan(entry, request);
                    report.record(&entry.name, outcome)
                }
                None => {
                    debug!(file = %entry.name, "ignoring unsupported file");
                    report.record_ignored(&entry.name)
                }
            },
        );

        let summary = report.summary();
        info!(
            selected = summary.selected,
            with_problems = summary.with_problems,
            ignored = summary.ignored,
            findings = report.findings.len(),
            "scan finished"
        );
        Ok(report)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(HandlerRegistry::with_defaults())
    }
}

/// Scan `directory` with the default handlers and render the text report
pub fn generate_report(
    directory: &Path,
    terms: &[SearchTerm],
    mode: SearchMode,
) -> Result<String, ReportError> {
    let request = SearchRequest::new(terms.to_vec(), mode);
    let report = Scanner::default().scan_directory(directory, &request)?;
    Ok(report.to_string())
}
