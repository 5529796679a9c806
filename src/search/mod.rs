mod mode;
mod snippet;
mod term;

pub use mode::{
    ContextPolicy, ContextWidth, SearchMode, SearchRequest, DEFAULT_CONTEXT_WIDTH,
    MAX_CONTEXT_WIDTH,
};
pub use snippet::{count_occurrences, find_matches, find_snippets, Match, Snippet};
pub use term::{parse_terms, SearchTerm, TERM_SEPARATOR};
