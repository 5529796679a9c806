// Excel (XLSX/XLS) scan handler

use crate::entry::ScanEntry;
use crate::error::ScanError;
use crate::model::{CellRef, FileOutcome, Finding, Location};
use crate::scan::handler::{search_unit, ScanHandler};
use crate::search::SearchRequest;
use calamine::{open_workbook, Data, Range, Reader, Xls, Xlsx};
use std::io::{Read, Seek};

/// The two workbook containers differ in which cells are searchable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkbookKind {
    /// `.xlsx`: only string cells; formulas are read as their cached values
    Modern,
    /// `.xls`: every non-empty cell, rendered as text
    Legacy,
}

impl WorkbookKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "xlsx" => Some(Self::Modern),
            "xls" => Some(Self::Legacy),
            _ => None,
        }
    }

    /// Searchable text of a cell, or `None` if the cell is skipped
    pub fn cell_text(self, cell: &Data) -> Option<String> {
        match (self, cell) {
            (_, Data::Empty) => None,
            (Self::Modern, Data::String(s)) => Some(s.clone()),
            (Self::Modern, _) => None,
            (Self::Legacy, other) => Some(other.to_string()),
        }
    }

    /// Legacy references are flagged as approximate
    pub fn cell_ref(self, row: u32, column: u32) -> CellRef {
        match self {
            Self::Modern => CellRef::new(row, column),
            Self::Legacy => CellRef::approximate(row, column),
        }
    }
}

pub struct SpreadsheetScanHandler;

impl SpreadsheetScanHandler {
    pub fn new() -> Self {
        Self
    }

    /// Search every cell of one sheet, row by row.
    ///
    /// References are absolute: the range may not start at A1.
    pub fn range_findings(
        file_name: &str,
        sheet: &str,
        range: &Range<Data>,
        kind: WorkbookKind,
        request: &SearchRequest,
    ) -> Vec<Finding> {
        let (first_row, first_col) = range.start().unwrap_or((0, 0));
        let mut findings = Vec::new();
        for (row, col, cell) in range.cells() {
            let Some(text) = kind.cell_text(cell) else {
                continue;
            };
            if text.is_empty() {
                continue;
            }
            let location = Location::Cell {
                sheet: sheet.to_string(),
                reference: kind.cell_ref(first_row + row as u32, first_col + col as u32),
            };
            findings.extend(search_unit(file_name, &location, &text, request));
        }
        findings
    }

    fn search_workbook<RS, R>(
        workbook: &mut R,
        kind: WorkbookKind,
        entry: &ScanEntry,
        request: &SearchRequest,
    ) -> Result<Vec<Finding>, ScanError>
    where
        RS: Read + Seek,
        R: Reader<RS>,
        ScanError: From<R::Error>,
    {
        let mut findings = Vec::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&sheet_name)?;
            findings.extend(Self::range_findings(
                &entry.name,
                &sheet_name,
                &range,
                kind,
                request,
            ));
        }
        Ok(findings)
    }
}

impl ScanHandler for SpreadsheetScanHandler {
    fn name(&self) -> &str {
        "spreadsheet"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["xlsx", "xls"]
    }

    fn search(
        &self,
        entry: &ScanEntry,
        request: &SearchRequest,
    ) -> Result<FileOutcome, ScanError> {
        let findings = match WorkbookKind::from_extension(&entry.extension) {
            Some(WorkbookKind::Modern) => {
                let mut workbook: Xlsx<_> = open_workbook(&entry.path)?;
                Self::search_workbook(&mut workbook, WorkbookKind::Modern, entry, request)?
            }
            Some(WorkbookKind::Legacy) => {
                let mut workbook: Xls<_> = open_workbook(&entry.path)?;
                Self::search_workbook(&mut workbook, WorkbookKind::Legacy, entry, request)?
            }
            None => Vec::new(),
        };

        Ok(FileOutcome::from_findings(findings))
    }
}
