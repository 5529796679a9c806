use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("ERROR"),
            Severity::Warning => f.write_str("WARNING"),
        }
    }
}

/// File-scoped issues; none of them stop the scan
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProblemKind {
    /// Document has no pages at all
    CorruptOrEmpty,
    /// Document has pages but none of them carries text
    NoExtractableText,
    /// The format library rejected the file
    ParseFailure(String),
}

impl ProblemKind {
    pub fn severity(&self) -> Severity {
        match self {
            ProblemKind::NoExtractableText => Severity::Warning,
            ProblemKind::CorruptOrEmpty | ProblemKind::ParseFailure(_) => Severity::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ProblemKind::CorruptOrEmpty => "The PDF is empty or corrupt (0 pages).".to_string(),
            ProblemKind::NoExtractableText => {
                "The PDF document appears to contain only images and has no extractable text."
                    .to_string()
            }
            ProblemKind::ParseFailure(reason) => {
                format!("Could not be processed. Reason: {}", reason)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub file_name: String,
    pub kind: ProblemKind,
}

impl Problem {
    pub fn new(file_name: impl Into<String>, kind: ProblemKind) -> Self {
        Self {
            file_name: file_name.into(),
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: '{}' -> {}: {}",
            self.file_name,
            self.severity(),
            self.kind.message()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_by_kind() {
        assert_eq!(ProblemKind::CorruptOrEmpty.severity(), Severity::Error);
        assert_eq!(ProblemKind::NoExtractableText.severity(), Severity::Warning);
        assert_eq!(
            ProblemKind::ParseFailure("bad".into()).severity(),
            Severity::Error
        );
    }

    #[test]
    fn test_problem_display() {
        let problem = Problem::new("scan.pdf", ProblemKind::NoExtractableText);
        assert_eq!(
            problem.to_string(),
            "File: 'scan.pdf' -> WARNING: The PDF document appears to contain only images and has no extractable text."
        );

        let problem = Problem::new("x.docx", ProblemKind::ParseFailure("zip error".into()));
        assert_eq!(
            problem.to_string(),
            "File: 'x.docx' -> ERROR: Could not be processed. Reason: zip error"
        );
    }
}
