//! Tests for recovering structured payloads from response text.

use tablescope::extract::{ChartAxes, ChartValue};
use tablescope::{ChartError, ChartType, PayloadExtractor};

const CSV_BLOCK: &str = "```csv\nregion,sales\nNorth,120\nSouth,80\n```";
const JSON_BLOCK: &str = "```json\n{\"type\": \"bar\", \"data\": [{\"region\": \"North\", \"sales\": 120}, {\"region\": \"South\", \"sales\": 80}], \"categoryKey\": \"region\", \"dataKey\": \"sales\"}\n```";

// =============================================================================
// Block Recognition
// =============================================================================

#[test]
fn test_block_order_does_not_matter() {
    let extractor = PayloadExtractor::new();
    let first = extractor.extract(&format!("Summary.\n{CSV_BLOCK}\n{JSON_BLOCK}\nThanks."));
    let second = extractor.extract(&format!("Summary.\n{JSON_BLOCK}\n{CSV_BLOCK}\nThanks."));

    assert_eq!(first.text, second.text);
    assert_eq!(first.dataset, second.dataset);
    assert_eq!(first.chart, second.chart);
    assert_eq!(first.text, "Summary.\nThanks.");

    for payload in [&first, &second] {
        assert!(!payload.text.contains("```"));
        assert!(payload.chart.is_some());
        assert_eq!(
            payload.dataset.as_deref(),
            Some("region,sales\nNorth,120\nSouth,80")
        );
    }
}

#[test]
fn test_chart_fields() {
    let payload = PayloadExtractor::new().extract(JSON_BLOCK);
    let chart = payload.chart.expect("chart parsed");

    assert_eq!(chart.chart_type, ChartType::Bar);
    assert_eq!(chart.data.len(), 2);
    assert_eq!(chart.data[1]["sales"], ChartValue::Number(80.0));
    assert_eq!(
        chart.axes,
        ChartAxes::Category {
            category_key: "region".into(),
            data_key: "sales".into()
        }
    );
    assert_eq!(payload.text, "");
}

#[test]
fn test_tags_are_case_insensitive() {
    let payload = PayloadExtractor::new().extract("```CSV\na\n1\n```");
    assert_eq!(payload.dataset.as_deref(), Some("a\n1"));
}

#[test]
fn test_markdown_tables_pass_through() {
    let text = "| a | b |\n|---|---|\n| 1 | 2 |\n\n```sql\nSELECT 1;\n```";
    let payload = PayloadExtractor::new().extract(text);

    assert_eq!(payload.text, text);
    assert!(!payload.has_payload());
}

#[test]
fn test_duplicate_chart_blocks_first_wins() {
    let second = "```json\n{\"type\": \"pie\", \"data\": [], \"categoryKey\": \"a\", \"dataKey\": \"b\"}\n```";
    let payload = PayloadExtractor::new().extract(&format!("{JSON_BLOCK}\n{second}"));

    assert_eq!(payload.chart.unwrap().chart_type, ChartType::Bar);
    assert_eq!(payload.text, second);
}

// =============================================================================
// Malformed Charts
// =============================================================================

#[test]
fn test_invalid_json_dropped_text_kept() {
    let text = "Here is the breakdown.\n\n```json\n{\"type\": \"bar\", \"data\": [\n```\n\nLet me know.";
    let payload = PayloadExtractor::new().extract(text);

    assert!(payload.chart.is_none());
    assert!(matches!(payload.chart_error, Some(ChartError::Syntax(_))));
    assert_eq!(payload.text, "Here is the breakdown.\n\n\nLet me know.");
}

#[test]
fn test_missing_axis_keys_dropped() {
    let text = "```json\n{\"type\": \"scatter\", \"data\": [{\"x\": 1, \"y\": 2}], \"xKey\": \"x\"}\n```\nSee above.";
    let payload = PayloadExtractor::new().extract(text);

    assert!(payload.chart.is_none());
    assert!(matches!(
        payload.chart_error,
        Some(ChartError::MissingAxisKey {
            chart_type: ChartType::Scatter,
            key: "yKey"
        })
    ));
    assert_eq!(payload.text, "See above.");
}

#[test]
fn test_malformed_chart_keeps_dataset() {
    let payload =
        PayloadExtractor::new().extract(&format!("{CSV_BLOCK}\n```json\nnot json\n```\nok"));

    assert!(payload.dataset.is_some());
    assert!(payload.chart.is_none());
    assert_eq!(payload.text, "ok");
}
