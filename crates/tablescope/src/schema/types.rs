//! Core type definitions for cell and column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a single non-missing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellType {
    /// Finite number.
    Numeric,
    /// Boolean-like token (true/false, yes/no, 0/1).
    Boolean,
    /// Anything else.
    String,
}

/// Resolved type for a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Numeric,
    Boolean,
    String,
    /// Text mixed with other cell types.
    #[serde(rename = "String (Mixed)")]
    StringMixed,
    /// Every cell is missing.
    Empty,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }

    /// Get the display label used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "Numeric",
            ColumnType::Boolean => "Boolean",
            ColumnType::String => "String",
            ColumnType::StringMixed => "String (Mixed)",
            ColumnType::Empty => "Empty",
        }
    }
}

impl From<CellType> for ColumnType {
    fn from(cell: CellType) -> Self {
        match cell {
            CellType::Numeric => ColumnType::Numeric,
            CellType::Boolean => ColumnType::Boolean,
            CellType::String => ColumnType::String,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
