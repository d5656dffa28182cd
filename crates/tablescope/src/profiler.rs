//! Profile aggregation: the single entry point for profiling a dataset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, TableScopeError};
use crate::extract::{ChartSpec, ExtractorConfig, PayloadExtractor};
use crate::inference::{
    StatisticsEngine, TypeInferencer, DEFAULT_BOOLEAN_THRESHOLD, DEFAULT_DECIMALS,
};
use crate::input::{parse_raw, RawTable};
use crate::schema::ColumnProfile;
use crate::validation::{IssueDigest, ValidationEngine, ValidationIssue, DEFAULT_REPORTED_ISSUES};

/// Configuration for profiling and response handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Maximum distinct values for a non-numeric column to be labeled boolean.
    pub boolean_distinct_threshold: usize,
    /// Only the first N data rows vote on column types (None = all rows).
    pub type_sample_rows: Option<usize>,
    /// Decimals kept in stored numeric statistics.
    pub decimals: u32,
    /// Issues surfaced by [`DatasetProfile::digest`].
    pub max_reported_issues: usize,
    /// Fenced block tags for response extraction.
    pub extractor: ExtractorConfig,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            boolean_distinct_threshold: DEFAULT_BOOLEAN_THRESHOLD,
            type_sample_rows: None,
            decimals: DEFAULT_DECIMALS,
            max_reported_issues: DEFAULT_REPORTED_ISSUES,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl ProfilerConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| TableScopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Result of one profiling pass.
///
/// A new profile replaces the previous one wholesale; profiles are never
/// updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProfile {
    /// One profile per named column, in header order.
    pub columns: Vec<ColumnProfile>,
    /// Integrity issues in row-then-column order.
    pub issues: Vec<ValidationIssue>,
    /// Number of data rows.
    pub row_count: usize,
    /// Number of named columns.
    pub column_count: usize,
    /// SHA-256 of the raw text, `sha256:<hex>`.
    pub fingerprint: String,
    /// Issues surfaced by [`DatasetProfile::digest`].
    #[serde(skip, default = "default_reported_issues")]
    pub max_reported_issues: usize,
}

fn default_reported_issues() -> usize {
    DEFAULT_REPORTED_ISSUES
}

impl DatasetProfile {
    /// Get a column by name (first match for duplicate headers).
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns true if no integrity issue is outstanding.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Summarize the issues for display, keeping the configured number.
    pub fn digest(&self) -> IssueDigest<'_> {
        IssueDigest::new(&self.issues, self.max_reported_issues)
    }
}

/// What happened to the dataset after a response was applied.
#[derive(Debug)]
pub enum DatasetUpdate {
    /// The response carried no dataset block.
    Unchanged,
    /// The dataset block profiled successfully and replaces the current one.
    Replaced(DatasetProfile),
    /// The dataset block was unusable; the current dataset stays.
    Rejected(TableScopeError),
}

impl DatasetUpdate {
    /// Get the replacement profile, if any.
    pub fn replacement(&self) -> Option<&DatasetProfile> {
        match self {
            DatasetUpdate::Replaced(profile) => Some(profile),
            _ => None,
        }
    }
}

/// A processed response from the text-generation service.
#[derive(Debug)]
pub struct ResponseOutcome {
    /// Prose with recognized blocks removed.
    pub text: String,
    /// Dataset replacement status.
    pub dataset: DatasetUpdate,
    /// Chart to render, if one parsed.
    pub chart: Option<ChartSpec>,
}

/// Profiles raw comma-separated text.
pub struct Profiler {
    config: ProfilerConfig,
    inference: TypeInferencer,
    statistics: StatisticsEngine,
    validation: ValidationEngine,
    extractor: PayloadExtractor,
}

impl Profiler {
    /// Create a profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let inference = TypeInferencer::with_threshold(config.boolean_distinct_threshold)
            .with_sample_rows(config.type_sample_rows);
        let statistics = StatisticsEngine::with_decimals(config.decimals);
        let extractor = PayloadExtractor::with_config(config.extractor.clone());

        Self {
            config,
            inference,
            statistics,
            validation: ValidationEngine::new(),
            extractor,
        }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profile raw text.
    ///
    /// Fails only when the text cannot be read as a table at all; integrity
    /// problems are returned as issues alongside the profile.
    pub fn profile(&self, text: &str) -> Result<DatasetProfile> {
        let table = parse_raw(text)?;
        let columns = self.profile_columns(&table);
        let issues = self.validation.validate(&table, &columns);

        tracing::debug!(
            rows = table.row_count(),
            columns = columns.len(),
            issues = issues.len(),
            "profiled dataset"
        );

        Ok(DatasetProfile {
            row_count: table.row_count(),
            column_count: columns.len(),
            columns,
            issues,
            fingerprint: fingerprint(text),
            max_reported_issues: self.config.max_reported_issues,
        })
    }

    /// Read a UTF-8 file and profile its contents.
    pub fn profile_file(&self, path: impl AsRef<Path>) -> Result<DatasetProfile> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TableScopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.profile(&text)
    }

    /// Extract payloads from a response and re-profile any dataset it carries.
    pub fn apply_response(&self, response: &str) -> ResponseOutcome {
        let payload = self.extractor.extract(response);

        let dataset = match payload.dataset {
            None => DatasetUpdate::Unchanged,
            Some(raw) => match self.profile(&raw) {
                Ok(profile) => DatasetUpdate::Replaced(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "rejecting dataset replacement");
                    DatasetUpdate::Rejected(e)
                }
            },
        };

        ResponseOutcome {
            text: payload.text,
            dataset,
            chart: payload.chart,
        }
    }

    fn profile_columns(&self, table: &RawTable) -> Vec<ColumnProfile> {
        let total_rows = table.row_count();

        table
            .columns()
            .map(|(name, position)| {
                let inference = self.inference.infer_column(table, position);
                let stats = self
                    .statistics
                    .compute(inference.column_type, table.column_values(position));

                ColumnProfile {
                    name: name.to_string(),
                    position,
                    column_type: inference.column_type,
                    has_missing_values: inference.missing_count > 0,
                    total_rows,
                    missing_count: inference.missing_count,
                    stats,
                }
            })
            .collect()
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the content fingerprint of raw text.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
