use super::{Finding, Problem, ProblemKind};

/// Everything one file contributed to a scan
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileOutcome {
    pub findings: Vec<Finding>,
    pub problems: Vec<Problem>,
}

impl FileOutcome {
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        Self {
            findings,
            problems: Vec::new(),
        }
    }

    /// Outcome of a file that produced a single problem and nothing else
    pub fn problem(file_name: impl Into<String>, kind: ProblemKind) -> Self {
        Self {
            findings: Vec::new(),
            problems: vec![Problem::new(file_name, kind)],
        }
    }

    pub fn is_problematic(&self) -> bool {
        !self.problems.is_empty()
    }
}
