//! Recovers a replacement dataset and a chart from response text.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::chart::{ChartError, ChartSpec};
use super::fence::{scan_fences, FencedBlock};

/// Extractor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Fence tag marking a replacement dataset (compared lower-cased).
    pub dataset_tag: String,
    /// Fence tag marking a chart specification (compared lower-cased).
    pub chart_tag: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            dataset_tag: "csv".to_string(),
            chart_tag: "json".to_string(),
        }
    }
}

/// Structured payloads found in a block of text.
#[derive(Debug)]
pub struct ExtractedPayload {
    /// Text with recognized blocks removed, trimmed.
    pub text: String,
    /// Raw table text from the first dataset block.
    pub dataset: Option<String>,
    /// Chart from the first chart block, if it parsed.
    pub chart: Option<ChartSpec>,
    /// Why the first chart block was dropped, if it was.
    pub chart_error: Option<ChartError>,
}

impl ExtractedPayload {
    /// Returns true if any structured payload was recovered.
    pub fn has_payload(&self) -> bool {
        self.dataset.is_some() || self.chart.is_some()
    }
}

/// Scans response text for fenced dataset and chart blocks.
///
/// Only the first block carrying each tag is recognized. Later duplicates and
/// blocks with other tags are left in the text for the renderer.
#[derive(Debug, Clone, Default)]
pub struct PayloadExtractor {
    config: ExtractorConfig,
}

impl PayloadExtractor {
    /// Create an extractor using the `csv` and `json` tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract structured payloads from `text`.
    pub fn extract(&self, text: &str) -> ExtractedPayload {
        let blocks = scan_fences(text);
        let dataset_tag = self.config.dataset_tag.to_ascii_lowercase();
        let chart_tag = self.config.chart_tag.to_ascii_lowercase();

        let dataset_block = first_tagged(&blocks, &dataset_tag);
        let chart_block = first_tagged(&blocks, &chart_tag);

        let mut chart = None;
        let mut chart_error = None;
        if let Some(block) = chart_block {
            match ChartSpec::from_json(block.body) {
                Ok(spec) => chart = Some(spec),
                Err(e) => {
                    tracing::warn!(error = %e, "dropping malformed chart specification");
                    chart_error = Some(e);
                }
            }
        }

        let removed: Vec<Range<usize>> = [dataset_block, chart_block]
            .into_iter()
            .flatten()
            .map(|block| block.span.clone())
            .collect();

        tracing::debug!(
            blocks = blocks.len(),
            dataset = dataset_block.is_some(),
            chart = chart.is_some(),
            "extracted response payloads"
        );

        ExtractedPayload {
            text: remove_spans(text, removed),
            dataset: dataset_block.map(|block| block.body.to_string()),
            chart,
            chart_error,
        }
    }
}

fn first_tagged<'b, 'a>(blocks: &'b [FencedBlock<'a>], tag: &str) -> Option<&'b FencedBlock<'a>> {
    blocks.iter().find(|block| block.tag == tag)
}

/// Copy `text` without the given byte ranges, then trim.
fn remove_spans(text: &str, mut spans: Vec<Range<usize>>) -> String {
    spans.sort_by_key(|span| span.start);

    let mut residual = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor {
            cursor = cursor.max(span.end);
            continue;
        }
        residual.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    residual.push_str(&text[cursor..]);

    residual.trim().to_string()
}
