mod finding;
mod outcome;
mod problem;

pub use finding::{column_letters, CellRef, Finding, FindingDetail, Location};
pub use outcome::FileOutcome;
pub use problem::{Problem, ProblemKind, Severity};
