// Plain text scan handler

use crate::entry::ScanEntry;
use crate::error::ScanError;
use crate::model::{FileOutcome, Location};
use crate::scan::handler::{search_unit, ScanHandler};
use crate::search::SearchRequest;
use std::fs;

pub struct TextScanHandler;

impl TextScanHandler {
    pub fn new() -> Self {
        Self
    }
}

/// Decode UTF-8, silently dropping invalid byte sequences
pub(crate) fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Split on `\n`, `\r\n` and a lone `\r`; a trailing empty line is dropped
pub(crate) fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while let Some(pos) = rest.find(['\n', '\r']) {
        lines.push(&rest[..pos]);
        let break_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + break_len..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

impl ScanHandler for TextScanHandler {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn search(
        &self,
        entry: &ScanEntry,
        request: &SearchRequest,
    ) -> Result<FileOutcome, ScanError> {
        let data = fs::read(&entry.path)?;
        let content = decode_utf8_dropping_invalid(&data);

        let findings = split_lines(&content)
            .into_iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .flat_map(|(index, line)| {
                search_unit(&entry.name, &Location::Line(index + 1), line, request)
            })
            .collect();

        Ok(FileOutcome::from_findings(findings))
    }
}
