//! Column profile types produced by a profiling pass.

mod column;
mod types;

pub use column::{CategoricalStats, ColumnProfile, ColumnStats, NumericStats};
pub use types::{CellType, ColumnType};
