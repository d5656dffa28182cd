//! Descriptive statistics for profiled columns.

use indexmap::IndexMap;

use crate::input::RawTable;
use crate::schema::{CategoricalStats, ColumnStats, ColumnType, NumericStats};

use super::classify::parse_number;

/// Default number of decimals kept in stored statistics.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Magnitude above which moments are accumulated on rescaled values.
const RESCALE_ABOVE: f64 = 1e150;

// =============================================================================
// RUNNING MOMENTS
// =============================================================================
// Welford's online algorithm for mean and variance in a single pass.

#[derive(Debug, Clone, Default)]
struct RunningMoments {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
}

impl RunningMoments {
    fn add(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Population variance (divides by N).
    fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }
}

/// Unrounded numeric summary of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    /// Number of values summarized.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl NumericSummary {
    /// Round every statistic for storage.
    pub fn rounded(&self, decimals: u32) -> NumericStats {
        NumericStats {
            mean: round_to(self.mean, decimals),
            median: round_to(self.median, decimals),
            std_dev: round_to(self.std_dev, decimals),
            min: round_to(self.min, decimals),
            max: round_to(self.max, decimals),
        }
    }
}

/// Round half away from zero to a fixed number of decimals.
///
/// Values too large to scale are already integral and returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Summarize a slice of numbers. Returns `None` for an empty slice.
pub fn summarize(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let min = sorted[0];
    let max = sorted[count - 1];

    // Near f64::MAX the deviations overflow; accumulate in [-1, 1] instead.
    let magnitude = min.abs().max(max.abs());
    let scale = if magnitude > RESCALE_ABOVE { magnitude } else { 1.0 };

    let mut moments = RunningMoments::default();
    for &value in values {
        moments.add(value / scale);
    }

    let mid = count / 2;
    let median = if count % 2 == 0 {
        sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
    } else {
        sorted[mid]
    };

    Some(NumericSummary {
        count,
        mean: moments.mean * scale,
        median,
        std_dev: moments.variance().sqrt() * scale,
        min,
        max,
    })
}

/// Count occurrences of each distinct value. Returns `None` when empty.
pub fn categorical<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<CategoricalStats> {
    let mut value_counts: IndexMap<String, usize> = IndexMap::new();
    for value in values {
        *value_counts.entry(value.to_string()).or_insert(0) += 1;
    }

    if value_counts.is_empty() {
        None
    } else {
        Some(CategoricalStats::from_counts(value_counts))
    }
}

/// Computes statistics for a column given its resolved type.
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    decimals: u32,
}

impl StatisticsEngine {
    /// Create an engine that rounds to two decimals.
    pub fn new() -> Self {
        Self::with_decimals(DEFAULT_DECIMALS)
    }

    /// Create an engine with custom rounding.
    pub fn with_decimals(decimals: u32) -> Self {
        Self { decimals }
    }

    /// Compute the unrounded numeric summary of a column's parseable values.
    pub fn numeric_summary<'a>(
        &self,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Option<NumericSummary> {
        let numbers: Vec<f64> = values
            .into_iter()
            .filter(|v| !RawTable::is_missing(v))
            .filter_map(parse_number)
            .collect();
        summarize(&numbers)
    }

    /// Compute stored statistics for a column.
    ///
    /// Unparseable cells in numeric columns are skipped here; the validator
    /// reports them.
    pub fn compute<'a>(
        &self,
        column_type: ColumnType,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Option<ColumnStats> {
        match column_type {
            ColumnType::Empty => None,
            ColumnType::Numeric => self
                .numeric_summary(values)
                .map(|summary| ColumnStats::Numeric(summary.rounded(self.decimals))),
            ColumnType::Boolean | ColumnType::String | ColumnType::StringMixed => {
                categorical(values.into_iter().filter(|v| !RawTable::is_missing(v)))
                    .map(ColumnStats::Categorical)
            }
        }
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
