//! Cell classification and column type resolution.

use std::collections::{BTreeSet, HashSet};

use crate::input::RawTable;
use crate::schema::{CellType, ColumnType};

/// Tokens treated as boolean, compared case-insensitively.
const BOOLEAN_TOKENS: &[&str] = &["true", "false", "yes", "no", "0", "1"];

/// Default distinct-value ceiling for relabeling a column as boolean.
pub const DEFAULT_BOOLEAN_THRESHOLD: usize = 2;

/// Returns true if the value parses as a finite number.
pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Parse a value as a finite number.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Classify a single cell. Missing cells are not classified.
pub fn classify_cell(value: &str) -> Option<CellType> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if BOOLEAN_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return Some(CellType::Boolean);
    }

    if is_numeric(trimmed) {
        return Some(CellType::Numeric);
    }

    Some(CellType::String)
}

/// Reduce the distinct cell types seen in a column to one column type.
pub fn reduce_cell_types(types: &BTreeSet<CellType>) -> ColumnType {
    let mut iter = types.iter();
    match (iter.next(), iter.next(), iter.next()) {
        (None, _, _) => ColumnType::Empty,
        (Some(&only), None, _) => only.into(),
        _ if types.contains(&CellType::String) => ColumnType::StringMixed,
        (Some(CellType::Numeric), Some(CellType::Boolean), None) => ColumnType::Numeric,
        _ => ColumnType::StringMixed,
    }
}

/// Apply the few-distinct-values heuristic to a reduced type.
///
/// Non-numeric, non-empty columns with at most `threshold` distinct values
/// are labeled boolean.
pub fn resolve_column_type(raw: ColumnType, distinct_values: usize, threshold: usize) -> ColumnType {
    match raw {
        ColumnType::Empty | ColumnType::Numeric => raw,
        _ if distinct_values <= threshold => ColumnType::Boolean,
        _ => raw,
    }
}

/// Result of inferring one column's type.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInference {
    /// Resolved column type.
    pub column_type: ColumnType,
    /// Type before the boolean relabel heuristic.
    pub raw_type: ColumnType,
    /// Number of missing cells.
    pub missing_count: usize,
    /// Number of cells that received a classification.
    pub classified_count: usize,
    /// Number of distinct non-missing values.
    pub distinct_values: usize,
}

/// Infers column types from cell values.
#[derive(Debug, Clone)]
pub struct TypeInferencer {
    /// Maximum distinct values for a non-numeric column to be labeled boolean.
    boolean_threshold: usize,
    /// Only the first N rows vote on the column type (None = all rows).
    sample_rows: Option<usize>,
}

impl TypeInferencer {
    /// Create an inferencer with the default threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_BOOLEAN_THRESHOLD)
    }

    /// Create an inferencer with a custom boolean relabel threshold.
    pub fn with_threshold(boolean_threshold: usize) -> Self {
        Self {
            boolean_threshold,
            sample_rows: None,
        }
    }

    /// Restrict type voting to the first `rows` rows.
    ///
    /// Missing counts and distinct values still cover every row, and a
    /// sample with no values falls back to the whole column.
    pub fn with_sample_rows(mut self, rows: Option<usize>) -> Self {
        self.sample_rows = rows;
        self
    }

    /// Infer the type of a column from its values.
    pub fn infer<'a>(&self, values: impl IntoIterator<Item = &'a str>) -> ColumnInference {
        let limit = self.sample_rows.unwrap_or(usize::MAX);
        let mut sampled = BTreeSet::new();
        let mut all = BTreeSet::new();
        let mut distinct: HashSet<&str> = HashSet::new();
        let mut missing_count = 0;
        let mut classified_count = 0;

        for (row_idx, value) in values.into_iter().enumerate() {
            match classify_cell(value) {
                Some(cell_type) => {
                    if row_idx < limit {
                        sampled.insert(cell_type);
                    }
                    all.insert(cell_type);
                    distinct.insert(value);
                    classified_count += 1;
                }
                None => missing_count += 1,
            }
        }

        // A sample of only missing cells must not hide values further down.
        let types = if sampled.is_empty() { &all } else { &sampled };
        let raw_type = reduce_cell_types(types);
        let column_type = resolve_column_type(raw_type, distinct.len(), self.boolean_threshold);

        ColumnInference {
            column_type,
            raw_type,
            missing_count,
            classified_count,
            distinct_values: distinct.len(),
        }
    }

    /// Infer the type of the column at an original header position.
    pub fn infer_column(&self, table: &RawTable, position: usize) -> ColumnInference {
        self.infer(table.column_values(position))
    }
}

impl Default for TypeInferencer {
    fn default() -> Self {
        Self::new()
    }
}
