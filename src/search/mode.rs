use super::SearchTerm;
use std::fmt;

pub const DEFAULT_CONTEXT_WIDTH: usize = 240;
pub const MAX_CONTEXT_WIDTH: usize = 1000;

/// Bounds applied when resolving a caller-provided context width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextPolicy {
    pub default_width: usize,
    pub max_width: usize,
}

impl Default for ContextPolicy {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_CONTEXT_WIDTH,
            max_width: MAX_CONTEXT_WIDTH,
        }
    }
}

/// Number of characters captured on each side of a match.
///
/// Zero means only the exact occurrence is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextWidth(usize);

impl ContextWidth {
    /// Resolve raw caller input against the policy.
    ///
    /// Missing, non-numeric, negative and out-of-range values all fall back
    /// to the policy default; nothing is rejected.
    pub fn resolve(raw: Option<&str>, policy: ContextPolicy) -> Self {
        match raw
            .and_then(|r| r.trim().parse::<i64>().ok())
            .and_then(|n| usize::try_from(n).ok())
        {
            Some(width) => Self::from_width(width, policy),
            None => Self(policy.default_width.min(policy.max_width)),
        }
    }

    /// Same fallback as [`ContextWidth::resolve`] for an already numeric width
    pub fn from_width(width: usize, policy: ContextPolicy) -> Self {
        if width <= policy.max_width {
            Self(width)
        } else {
            Self(policy.default_width.min(policy.max_width))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_exact(self) -> bool {
        self.0 == 0
    }
}

impl Default for ContextWidth {
    fn default() -> Self {
        Self(DEFAULT_CONTEXT_WIDTH)
    }
}

impl fmt::Display for ContextWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            write!(f, "0 (exact occurrences only)")
        } else {
            write!(f, "{} characters", self.0)
        }
    }
}

/// How matches inside a unit are reported
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Only the number of occurrences per unit
    CountOnly,
    /// One snippet per occurrence
    Context(ContextWidth),
}

impl Default for SearchMode {
    fn default() -> Self {
        Self::Context(ContextWidth::default())
    }
}

/// Everything a handler needs to scan one file
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub terms: Vec<SearchTerm>,
    pub mode: SearchMode,
}

impl SearchRequest {
    pub fn new(terms: Vec<SearchTerm>, mode: SearchMode) -> Self {
        Self { terms, mode }
    }
}
