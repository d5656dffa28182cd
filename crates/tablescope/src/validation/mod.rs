//! Integrity checks run against a fully profiled table.

mod issue;
mod validators;

pub use issue::{IssueDigest, IssueType, ValidationIssue, DEFAULT_REPORTED_ISSUES};
pub use validators::{MixedTypeValidator, RowLengthValidator, ValidationEngine, Validator};
