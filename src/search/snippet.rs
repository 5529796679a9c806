// Occurrence location and snippet rendering shared by every format handler

use super::term::fold_char;
use super::{ContextWidth, SearchTerm};
use std::fmt;

/// A single occurrence, in character offsets of the searched text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub len: usize,
}

/// Rendered view of one occurrence
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Snippet {
    /// The occurrence alone, used when no context is requested
    Exact(String),
    /// The occurrence with surrounding text, newlines flattened
    Context {
        before: String,
        matched: String,
        after: String,
    },
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snippet::Exact(matched) => write!(f, "Exact occurrence: '{}'", matched),
            Snippet::Context {
                before,
                matched,
                after,
            } => write!(f, "...{} >>>{}<<< {}...", before, matched, after),
        }
    }
}

/// Find every case-insensitive occurrence of `term` in `chars`.
///
/// Occurrences may overlap: the scan resumes one character after the start
/// of each match, so "aa" is found three times in "aaaa".
fn match_chars(chars: &[char], term: &SearchTerm) -> Vec<Match> {
    let needle = term.folded();
    if needle.is_empty() || needle.len() > chars.len() {
        return Vec::new();
    }

    let folded: Vec<char> = chars.iter().copied().map(fold_char).collect();
    folded
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(start, _)| Match {
            start,
            len: needle.len(),
        })
        .collect()
}

pub fn find_matches(text: &str, term: &SearchTerm) -> Vec<Match> {
    let chars: Vec<char> = text.chars().collect();
    match_chars(&chars, term)
}

pub fn count_occurrences(text: &str, term: &SearchTerm) -> usize {
    find_matches(text, term).len()
}

/// Render every occurrence of `term` in `text` as a snippet
pub fn find_snippets(text: &str, term: &SearchTerm, width: ContextWidth) -> Vec<Snippet> {
    let chars: Vec<char> = text.chars().collect();
    match_chars(&chars, term)
        .into_iter()
        .map(|m| {
            let end = m.start + m.len;
            let matched: String = chars[m.start..end].iter().collect();
            if width.is_exact() {
                return Snippet::Exact(matched);
            }
            let from = m.start.saturating_sub(width.get());
            let to = (end + width.get()).min(chars.len());
            Snippet::Context {
                before: flatten(&chars[from..m.start]),
                matched,
                after: flatten(&chars[end..to]),
            }
        })
        .collect()
}

fn flatten(chars: &[char]) -> String {
    chars
        .iter()
        .map(|&c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
