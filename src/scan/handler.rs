// Scan handler trait for the extensible per-format search system

use crate::entry::ScanEntry;
use crate::error::ScanError;
use crate::model::{FileOutcome, Finding, FindingDetail, Location};
use crate::search::{count_occurrences, find_snippets, SearchMode, SearchRequest};
use tracing::warn;

/// Trait for per-format scan handlers
///
/// Each handler owns one or more file extensions, knows how to split a file
/// into addressable units (pages, paragraphs, cells, lines) and searches
/// every unit for every requested term.
pub trait ScanHandler: Send + Sync {
    /// Name of this handler (for logging and debugging)
    fn name(&self) -> &str;

    /// Lowercase extensions, without the dot, this handler is responsible for
    fn extensions(&self) -> &'static [&'static str];

    /// Search one file
    ///
    /// Errors abort the file, never the scan; see [`ScanHandler::scan`].
    fn search(&self, entry: &ScanEntry, request: &SearchRequest)
        -> Result<FileOutcome, ScanError>;

    /// Search one file, turning any failure into a single problem
    fn scan(&self, entry: &ScanEntry, request: &SearchRequest) -> FileOutcome {
        match self.search(entry, request) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(handler = self.name(), file = %entry.name, error = %e, "file could not be scanned");
                FileOutcome::problem(entry.name.clone(), e.into_problem_kind())
            }
        }
    }
}

/// Search one addressable unit for every term, in term order.
///
/// Produces at most one finding per term, shaped by the request mode.
pub fn search_unit(
    file_name: &str,
    location: &Location,
    text: &str,
    request: &SearchRequest,
) -> Vec<Finding> {
    request
        .terms
        .iter()
        .filter_map(|term| {
            let detail = match request.mode {
                SearchMode::CountOnly => match count_occurrences(text, term) {
                    0 => return None,
                    n => FindingDetail::Count(n),
                },
                SearchMode::Context(width) => {
                    let snippets = find_snippets(text, term, width);
                    if snippets.is_empty() {
                        return None;
                    }
                    FindingDetail::Snippets(snippets)
                }
            };
            Some(Finding {
                file_name: file_name.to_string(),
                location: location.clone(),
                term: term.to_string(),
                detail,
            })
        })
        .collect()
}
