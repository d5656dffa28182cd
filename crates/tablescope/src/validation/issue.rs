//! Validation issue types and the caller-facing issue digest.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of issues surfaced to the user at once.
pub const DEFAULT_REPORTED_ISSUES: usize = 5;

/// Kind of integrity problem detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    /// Row cell count differs from the header width.
    InconsistentRowLength,
    /// Non-numeric value in a numeric column.
    MixedDataType,
}

impl IssueType {
    /// Get a human-readable label for the issue type.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::InconsistentRowLength => "Inconsistent Row Length",
            IssueType::MixedDataType => "Mixed Data Type",
        }
    }
}

/// A single integrity diagnostic.
///
/// `row` is 1-based and counts the header, so the first data row is row 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>,
    pub message: String,
    /// Header width, for row-length issues.
    #[serde(skip)]
    pub expected_cells: Option<usize>,
    /// Cells found in the row, for row-length issues.
    #[serde(skip)]
    pub found_cells: Option<usize>,
}

impl ValidationIssue {
    /// Create a row-length issue.
    pub fn inconsistent_row_length(row: usize, expected: usize, found: usize) -> Self {
        Self {
            issue_type: IssueType::InconsistentRowLength,
            row,
            column: None,
            value: None,
            message: format!(
                "Row {} has {} cells but the header defines {} columns",
                row, found, expected
            ),
            expected_cells: Some(expected),
            found_cells: Some(found),
        }
    }

    /// Create a mixed-type issue for a numeric column.
    pub fn mixed_data_type(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        let column = column.into();
        let value = value.into();
        Self {
            issue_type: IssueType::MixedDataType,
            row,
            message: format!(
                "Row {}, column '{}': expected a number but found '{}'",
                row, column, value
            ),
            column: Some(column),
            value: Some(value),
            expected_cells: None,
            found_cells: None,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The first few issues of a profile plus a count of the rest.
///
/// While any issue is outstanding, chart and analysis interactions should be
/// refused; this is what callers show instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDigest<'a> {
    /// Issues to surface, in discovery order.
    pub shown: &'a [ValidationIssue],
    /// Issues not surfaced.
    pub remaining: usize,
}

impl<'a> IssueDigest<'a> {
    /// Keep at most `limit` issues.
    pub fn new(issues: &'a [ValidationIssue], limit: usize) -> Self {
        let shown = &issues[..issues.len().min(limit)];
        Self {
            shown,
            remaining: issues.len() - shown.len(),
        }
    }

    /// Total number of issues.
    pub fn total(&self) -> usize {
        self.shown.len() + self.remaining
    }

    /// Returns true if any issue is outstanding.
    pub fn is_blocking(&self) -> bool {
        self.total() > 0
    }
}

impl fmt::Display for IssueDigest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_blocking() {
            return f.write_str("No data integrity issues found.");
        }

        writeln!(
            f,
            "Found {} data integrity issue{}:",
            self.total(),
            if self.total() == 1 { "" } else { "s" }
        )?;
        for issue in self.shown {
            writeln!(f, "- {}", issue)?;
        }
        if self.remaining > 0 {
            write!(f, "...and {} more", self.remaining)?;
        }
        Ok(())
    }
}
