use std::fmt;

/// Separator used when several terms arrive joined in a single string
pub const TERM_SEPARATOR: char = ';';

/// A non-empty search term, matched case-insensitively
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm {
    text: String,
    folded: Vec<char>,
}

impl SearchTerm {
    /// Build a term from user input, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            folded: text.chars().map(fold_char).collect(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Case-folded characters, one per character of the original term
    pub(crate) fn folded(&self) -> &[char] {
        &self.folded
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split a `;`-joined list of terms, dropping blank entries
pub fn parse_terms(raw: &str) -> Vec<SearchTerm> {
    raw.split(TERM_SEPARATOR).filter_map(SearchTerm::new).collect()
}

/// Lowercase a single character without changing the character count.
///
/// Characters whose lowercase form expands to several characters keep
/// their original form so that positions in folded and original text agree.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
