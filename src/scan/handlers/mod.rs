// Scan handlers module

mod docx;
mod pdf;
mod spreadsheet;
mod text;

pub use docx::DocxScanHandler;
pub use pdf::PdfScanHandler;
pub use spreadsheet::{SpreadsheetScanHandler, WorkbookKind};
pub use text::TextScanHandler;

#[cfg(test)]
pub(crate) use pdf::tests::write_pdf;
