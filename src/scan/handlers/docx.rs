// Word (DOCX) scan handler

use crate::entry::ScanEntry;
use crate::error::ScanError;
use crate::model::{FileOutcome, Location};
use crate::scan::handler::{search_unit, ScanHandler};
use crate::search::SearchRequest;
use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild,
    StructuredDataTagChild,
};
use std::fs;

pub struct DocxScanHandler;

impl DocxScanHandler {
    pub fn new() -> Self {
        Self
    }

    /// Text of a paragraph as the concatenation of its runs, including runs
    /// nested in hyperlinks, tracked insertions and content controls
    fn paragraph_text(para: &Paragraph) -> String {
        let mut text = String::new();
        Self::push_children_text(&para.children, &mut text);
        text
    }

    fn push_children_text(children: &[ParagraphChild], text: &mut String) {
        for child in children {
            match child {
                ParagraphChild::Run(run) => Self::push_run_text(run, text),
                ParagraphChild::Hyperlink(link) => Self::push_children_text(&link.children, text),
                ParagraphChild::Insert(insert) => {
                    for child in &insert.children {
                        if let InsertChild::Run(run) = child {
                            Self::push_run_text(run, text);
                        }
                    }
                }
                ParagraphChild::StructuredDataTag(tag) => {
                    for child in &tag.children {
                        match child {
                            StructuredDataTagChild::Run(run) => Self::push_run_text(run, text),
                            StructuredDataTagChild::Paragraph(inner) => {
                                Self::push_children_text(&inner.children, text)
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn push_run_text(run: &Run, text: &mut String) {
        for child in &run.children {
            match child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }
}

impl ScanHandler for DocxScanHandler {
    fn name(&self) -> &str {
        "docx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    fn search(
        &self,
        entry: &ScanEntry,
        request: &SearchRequest,
    ) -> Result<FileOutcome, ScanError> {
        let data = fs::read(&entry.path)?;
        let docx = read_docx(&data)?;

        // Paragraph numbers count every body paragraph, blank ones included
        let mut findings = Vec::new();
        let paragraphs = docx.document.children.iter().filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(para),
            _ => None,
        });
        for (index, para) in paragraphs.enumerate() {
            let text = Self::paragraph_text(para);
            if text.trim().is_empty() {
                continue;
            }
            findings.extend(search_unit(
                &entry.name,
                &Location::Paragraph(index + 1),
                &text,
                request,
            ));
        }

        Ok(FileOutcome::from_findings(findings))
    }
}
