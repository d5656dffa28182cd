//! Column profile definition and statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Descriptive statistics for a numeric column, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericStats {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Value frequencies for a non-numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalStats {
    /// Occurrences per distinct value, in first-seen order.
    pub value_counts: IndexMap<String, usize>,
    /// Number of distinct values.
    pub unique_values: usize,
}

impl CategoricalStats {
    /// Build from a frequency map, deriving the distinct count.
    pub fn from_counts(value_counts: IndexMap<String, usize>) -> Self {
        let unique_values = value_counts.len();
        Self {
            value_counts,
            unique_values,
        }
    }

    /// Get the most frequent value, earliest first on ties.
    pub fn mode(&self) -> Option<(&str, usize)> {
        self.value_counts
            .iter()
            .fold(None, |best: Option<(&str, usize)>, (value, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((value.as_str(), count)),
            })
    }
}

/// Statistics payload whose shape depends on the column type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Categorical(CategoricalStats),
}

impl ColumnStats {
    /// Get numeric statistics, if any.
    pub fn as_numeric(&self) -> Option<&NumericStats> {
        match self {
            ColumnStats::Numeric(stats) => Some(stats),
            ColumnStats::Categorical(_) => None,
        }
    }

    /// Get categorical statistics, if any.
    pub fn as_categorical(&self) -> Option<&CategoricalStats> {
        match self {
            ColumnStats::Categorical(stats) => Some(stats),
            ColumnStats::Numeric(_) => None,
        }
    }
}

/// Profile for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the source header row.
    #[serde(skip)]
    pub position: usize,
    /// Resolved column type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether any cell is missing.
    pub has_missing_values: bool,
    /// Number of data rows.
    pub total_rows: usize,
    /// Number of empty or whitespace-only cells.
    pub missing_count: usize,
    /// Statistics over non-missing values.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stats: Option<ColumnStats>,
}

impl ColumnProfile {
    /// Get the missing percentage.
    pub fn missing_percentage(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.missing_count as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Number of non-missing cells.
    pub fn present_count(&self) -> usize {
        self.total_rows - self.missing_count
    }
}
