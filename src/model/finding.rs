use crate::search::Snippet;
use std::fmt;

/// Spreadsheet-style cell reference, stored zero-based
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellRef {
    pub row: u32,
    pub column: u32,
    /// Marks references from legacy workbooks
    pub approximate: bool,
}

impl CellRef {
    pub fn new(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            approximate: false,
        }
    }

    pub fn approximate(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            approximate: true,
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.approximate {
            f.write_str("~")?;
        }
        write!(f, "{}{}", column_letters(self.column), self.row + 1)
    }
}

/// Convert a zero-based column index into letters: 0 -> A, 25 -> Z, 26 -> AA
pub fn column_letters(column: u32) -> String {
    let mut letters = Vec::new();
    let mut n = column as u64 + 1;
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Where inside a file an occurrence was found
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Page(usize),
    Paragraph(usize),
    Cell { sheet: String, reference: CellRef },
    Line(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Page(n) => write!(f, "Page: {}", n),
            Location::Paragraph(n) => write!(f, "Paragraph: {}", n),
            Location::Cell { sheet, reference } => {
                write!(f, "Sheet: '{}', Cell: {}", sheet, reference)
            }
            Location::Line(n) => write!(f, "Line: {}", n),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FindingDetail {
    Count(usize),
    Snippets(Vec<Snippet>),
}

impl FindingDetail {
    pub fn occurrences(&self) -> usize {
        match self {
            FindingDetail::Count(n) => *n,
            FindingDetail::Snippets(snippets) => snippets.len(),
        }
    }
}

/// One term matched inside one addressable unit of a file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub file_name: String,
    pub location: Location,
    pub term: String,
    pub detail: FindingDetail,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: '{}', {} -> Found: '{}' ({} occurrence(s)).",
            self.file_name,
            self.location,
            self.term,
            self.detail.occurrences()
        )?;
        if let FindingDetail::Snippets(snippets) = &self.detail {
            for snippet in snippets {
                write!(f, "\n    {}", snippet)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
    }

    #[test]
    fn test_cell_ref_display() {
        assert_eq!(CellRef::new(0, 0).to_string(), "A1");
        assert_eq!(CellRef::new(9, 27).to_string(), "AB10");
        assert_eq!(CellRef::approximate(2, 1).to_string(), "~B3");
    }

    #[test]
    fn test_finding_count_display() {
        let finding = Finding {
            file_name: "book.xlsx".to_string(),
            location: Location::Cell {
                sheet: "Sheet1".to_string(),
                reference: CellRef::new(1, 2),
            },
            term: "total".to_string(),
            detail: FindingDetail::Count(2),
        };
        assert_eq!(
            finding.to_string(),
            "File: 'book.xlsx', Sheet: 'Sheet1', Cell: C2 -> Found: 'total' (2 occurrence(s))."
        );
    }

    #[test]
    fn test_finding_snippet_display() {
        let finding = Finding {
            file_name: "notes.txt".to_string(),
            location: Location::Line(4),
            term: "hello".to_string(),
            detail: FindingDetail::Snippets(vec![
                Snippet::Exact("Hello".to_string()),
                Snippet::Exact("HELLO".to_string()),
            ]),
        };
        assert_eq!(
            finding.to_string(),
            "File: 'notes.txt', Line: 4 -> Found: 'hello' (2 occurrence(s)).\n    \
             Exact occurrence: 'Hello'\n    Exact occurrence: 'HELLO'"
        );
    }
}
