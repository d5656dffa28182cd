//! Structured payload extraction from free-form response text.
//!
//! Responses from the text-generation service may embed a replacement
//! dataset in a fenced `csv` block and a chart in a fenced `json` block.
//! The extractor recovers both and returns the remaining prose.

mod chart;
mod extractor;
mod fence;

pub use chart::{ChartAxes, ChartDocument, ChartError, ChartRecord, ChartSpec, ChartType, ChartValue};
pub use extractor::{ExtractedPayload, ExtractorConfig, PayloadExtractor};
pub use fence::{scan_fences, FencedBlock};
