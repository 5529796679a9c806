// PDF scan handler

use crate::entry::ScanEntry;
use crate::error::ScanError;
use crate::model::{FileOutcome, Location, ProblemKind};
use crate::scan::handler::{search_unit, ScanHandler};
use crate::search::SearchRequest;
use lopdf::Document as PdfDocument;
use tracing::debug;

pub struct PdfScanHandler;

impl PdfScanHandler {
    pub fn new() -> Self {
        Self
    }

    /// Extract the text of every page, keyed by 1-based page number
    fn extract_pages(doc: &PdfDocument) -> Result<Vec<(u32, String)>, ScanError> {
        doc.get_pages()
            .keys()
            .map(|&number| -> Result<(u32, String), ScanError> {
                Ok((number, doc.extract_text(&[number])?))
            })
            .collect()
    }
}

impl ScanHandler for PdfScanHandler {
    fn name(&self) -> &str {
        "pdf"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["pdf"]
    }

    fn search(
        &self,
        entry: &ScanEntry,
        request: &SearchRequest,
    ) -> Result<FileOutcome, ScanError> {
        let doc = PdfDocument::load(&entry.path)?;
        let pages = Self::extract_pages(&doc)?;
        if pages.is_empty() {
            return Err(ScanError::EmptyDocument);
        }
        debug!(file = %entry.name, pages = pages.len(), "pdf loaded");

        // Image-only documents are reported once instead of searched page by page
        if pages.iter().all(|(_, text)| text.trim().is_empty()) {
            return Ok(FileOutcome::problem(
                entry.name.clone(),
                ProblemKind::NoExtractableText,
            ));
        }

        let findings = pages
            .iter()
            .flat_map(|(number, text)| {
                search_unit(
                    &entry.name,
                    &Location::Page(*number as usize),
                    text,
                    request,
                )
            })
            .collect();

        Ok(FileOutcome::from_findings(findings))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{FindingDetail, Severity};
    use crate::search::{parse_terms, SearchMode};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Write a PDF with one page per entry of `pages`; `None` gives a page
    /// without any text operators
    pub(crate) fn write_pdf(dir: &Path, name: &str, pages: &[Option<&str>]) -> PathBuf {
        let mut doc = PdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let operations = match page {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("Failed to encode content"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let path = dir.join(name);
        doc.save(&path).expect("Failed to save pdf");
        path
    }

    fn scan(path: PathBuf, terms: &str) -> FileOutcome {
        let entry = ScanEntry::from_path(path).expect("entry");
        let request = SearchRequest::new(parse_terms(terms), SearchMode::CountOnly);
        PdfScanHandler::new().scan(&entry, &request)
    }

    #[test]
    fn test_zero_pages_is_corrupt() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let outcome = scan(write_pdf(dir.path(), "empty.pdf", &[]), "hello");

        assert!(outcome.findings.is_empty());
        assert_eq!(outcome.problems.len(), 1);
        assert_eq!(outcome.problems[0].kind, ProblemKind::CorruptOrEmpty);
        assert_eq!(outcome.problems[0].severity(), Severity::Error);
    }

    #[test]
    fn test_image_only_is_a_warning() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let outcome = scan(write_pdf(dir.path(), "scan.pdf", &[None, None]), "hello");

        assert!(outcome.findings.is_empty());
        assert_eq!(outcome.problems.len(), 1);
        assert_eq!(outcome.problems[0].kind, ProblemKind::NoExtractableText);
        assert_eq!(outcome.problems[0].severity(), Severity::Warning);
    }

    #[test]
    fn test_findings_per_page() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_pdf(
            dir.path(),
            "doc.pdf",
            &[Some("Hello World"), None, Some("nothing")],
        );
        let outcome = scan(path, "world");

        assert!(outcome.problems.is_empty());
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].location, Location::Page(1));
        assert_eq!(outcome.findings[0].detail, FindingDetail::Count(1));
    }

    #[test]
    fn test_garbage_is_a_parse_failure() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf").expect("Failed to write file");
        let outcome = scan(path, "hello");

        assert!(outcome.findings.is_empty());
        assert_eq!(outcome.problems.len(), 1);
        assert!(matches!(
            outcome.problems[0].kind,
            ProblemKind::ParseFailure(_)
        ));
    }
}
