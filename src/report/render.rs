// Plain text rendering of a finished scan

use super::scanner::ScanReport;
use crate::search::SearchMode;
use std::fmt;

const BANNER_WIDTH: usize = 79;

/// `title` centred in a line of `=`
fn banner(title: &str) -> String {
    let title = format!(" {} ", title);
    let fill = BANNER_WIDTH.saturating_sub(title.chars().count());
    let left = fill / 2;
    format!("{}{}{}", "=".repeat(left), title, "=".repeat(fill - left))
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    write!(f, "\n\n--- {} ---\n\n", title)
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self.terms.iter().map(|t| format!("'{}'", t)).collect();
        let extensions: Vec<String> = self
            .supported_extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect();

        writeln!(f, "{}", banner("SEARCH REPORT"))?;
        writeln!(f, "Search terms: [{}]", terms.join(", "))?;
        if let SearchMode::Context(width) = self.mode {
            writeln!(f, "Context width: {}", width)?;
        }
        writeln!(f, "Supported extensions: {}", extensions.join(", "))?;
        writeln!(f, "{}", "=".repeat(BANNER_WIDTH))?;

        write!(f, "\n--- OCCURRENCES FOUND ---\n\n")?;
        if self.findings().is_empty() {
            writeln!(f, "No occurrences of the search terms were found.")?;
        } else {
            for finding in self.findings() {
                writeln!(f, "{}", finding)?;
            }
        }

        section(f, "FILES PROCESSED WITH PROBLEMS OR WARNINGS")?;
        if self.problems().is_empty() {
            writeln!(f, "All supported files were analyzed without errors.")?;
        } else {
            for problem in self.problems() {
                writeln!(f, "{}", problem)?;
            }
        }

        let summary = self.summary();
        section(f, "UNSUPPORTED AND IGNORED FILES")?;
        writeln!(f, "Total: {}\n", summary.ignored)?;
        let ignored = self.ignored_files();
        if ignored.is_empty() {
            writeln!(f, "No files with unsupported formats were found.")?;
        } else {
            for name in ignored {
                writeln!(f, "- {}", name)?;
            }
        }

        write!(f, "\n\n{}\n", banner("FINAL SUMMARY"))?;
        writeln!(f, "TOTAL FILES SELECTED: {}", summary.selected)?;
        writeln!(
            f,
            "  - TOTAL FILES PROCESSED WITHOUT PROBLEMS: {}",
            summary.without_problems
        )?;
        writeln!(
            f,
            "  - TOTAL FILES PROCESSED WITH PROBLEMS OR WARNINGS: {}",
            summary.with_problems
        )?;
        writeln!(
            f,
            "  - TOTAL UNSUPPORTED AND IGNORED FILES: {}",
            summary.ignored
        )
    }
}
