//! Validators for checking raw rows against resolved column profiles.

use crate::inference::is_numeric;
use crate::input::RawTable;
use crate::schema::ColumnProfile;

use super::issue::ValidationIssue;

/// 1-based row number of a data row, counting the header as row 1.
fn display_row(row_idx: usize) -> usize {
    row_idx + 2
}

/// Trait for validators.
pub trait Validator {
    /// Run validation and return issues in row-then-column order.
    fn validate(&self, table: &RawTable, columns: &[ColumnProfile]) -> Vec<ValidationIssue>;
}

/// Flags rows whose cell count differs from the header width.
///
/// The width is the header cell count before blank headers were dropped.
pub struct RowLengthValidator;

impl Validator for RowLengthValidator {
    fn validate(&self, table: &RawTable, _columns: &[ColumnProfile]) -> Vec<ValidationIssue> {
        table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != table.header_width)
            .map(|(row_idx, row)| {
                ValidationIssue::inconsistent_row_length(
                    display_row(row_idx),
                    table.header_width,
                    row.len(),
                )
            })
            .collect()
    }
}

/// Flags non-numeric values in numeric columns.
///
/// Rows with the wrong width are skipped since their cells cannot be mapped
/// to columns reliably.
pub struct MixedTypeValidator;

impl Validator for MixedTypeValidator {
    fn validate(&self, table: &RawTable, columns: &[ColumnProfile]) -> Vec<ValidationIssue> {
        let numeric: Vec<&ColumnProfile> = columns
            .iter()
            .filter(|c| c.column_type.is_numeric())
            .collect();
        if numeric.is_empty() {
            return Vec::new();
        }

        let mut issues = Vec::new();
        for (row_idx, row) in table.rows.iter().enumerate() {
            if row.len() != table.header_width {
                continue;
            }

            for column in &numeric {
                let Some(value) = row.get(column.position) else {
                    continue;
                };
                if RawTable::is_missing(value) || is_numeric(value) {
                    continue;
                }
                issues.push(ValidationIssue::mixed_data_type(
                    display_row(row_idx),
                    &column.name,
                    value,
                ));
            }
        }

        issues
    }
}

/// Runs every validator and merges their issues.
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator + Send + Sync>>,
}

impl ValidationEngine {
    /// Create a new validation engine with all default validators.
    pub fn new() -> Self {
        Self {
            validators: vec![Box::new(RowLengthValidator), Box::new(MixedTypeValidator)],
        }
    }

    /// Run all validators and collect issues.
    ///
    /// Issues come back in row order; the sort is stable so each validator's
    /// column order within a row is preserved.
    pub fn validate(&self, table: &RawTable, columns: &[ColumnProfile]) -> Vec<ValidationIssue> {
        let mut all_issues = Vec::new();

        for validator in &self.validators {
            all_issues.extend(validator.validate(table, columns));
        }

        all_issues.sort_by_key(|issue| issue.row);

        all_issues
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
