//! tablescope: tabular data profiling and structured-payload extraction.
//!
//! Given raw comma-separated text, tablescope classifies each column,
//! computes descriptive statistics, and reports integrity issues. It also
//! recovers a replacement dataset and a chart specification from fenced
//! blocks embedded in free-form assistant responses, closing the loop by
//! re-profiling any replacement.
//!
//! # Core Principles
//!
//! - **Pure**: every pass is a deterministic function of its input
//! - **Replace, don't mutate**: each pass returns a fresh [`DatasetProfile`]
//! - **Degrade, don't fail**: bad payloads drop features for a turn, never crash
//!
//! # Example
//!
//! ```
//! use tablescope::{ColumnType, DatasetUpdate, Profiler};
//!
//! let profiler = Profiler::new();
//! let profile = profiler.profile("name,age\nAlice,30\nBob,25").unwrap();
//! assert_eq!(profile.column("age").unwrap().column_type, ColumnType::Numeric);
//!
//! let outcome = profiler.apply_response("Dropped a row.\n```csv\nname,age\nAlice,30\n```");
//! assert_eq!(outcome.text, "Dropped a row.");
//! assert!(matches!(outcome.dataset, DatasetUpdate::Replaced(_)));
//! ```

pub mod error;
pub mod extract;
pub mod inference;
pub mod input;
pub mod schema;
pub mod validation;

mod profiler;

pub use crate::profiler::{
    fingerprint, DatasetProfile, DatasetUpdate, Profiler, ProfilerConfig, ResponseOutcome,
};
pub use error::{Result, TableScopeError};
pub use extract::{ChartError, ChartSpec, ChartType, ExtractedPayload, ExtractorConfig, PayloadExtractor};
pub use input::RawTable;
pub use schema::{CategoricalStats, CellType, ColumnProfile, ColumnStats, ColumnType, NumericStats};
pub use validation::{IssueDigest, IssueType, ValidationIssue};
