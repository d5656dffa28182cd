//! Type inference and descriptive statistics for columns.

mod classify;
mod statistics;

pub use classify::{
    classify_cell, is_numeric, parse_number, reduce_cell_types, resolve_column_type,
    ColumnInference, TypeInferencer, DEFAULT_BOOLEAN_THRESHOLD,
};
pub use statistics::{
    categorical, round_to, summarize, NumericSummary, StatisticsEngine, DEFAULT_DECIMALS,
};
