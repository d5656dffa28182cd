//! Integration tests for tablescope.

use std::io::Write;
use tempfile::NamedTempFile;

use tablescope::inference::summarize;
use tablescope::{
    ColumnType, DatasetUpdate, IssueType, Profiler, ProfilerConfig, TableScopeError,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Basic Functionality Tests
// =============================================================================

#[test]
fn test_profile_file() {
    let content = "id,name,age,active\n\
                   1,Alice,30,true\n\
                   2,Bob,25,false\n\
                   3,Carol,28,true\n";
    let file = create_test_file(content);

    let profile = Profiler::new()
        .profile_file(file.path())
        .expect("Profiling failed");

    assert_eq!(profile.row_count, 3);
    assert_eq!(profile.column_count, 4);
    assert_eq!(profile.columns.len(), 4);
    assert!(profile.is_clean());
}

#[test]
fn test_profile_missing_file() {
    let result = Profiler::new().profile_file("/nonexistent/data.csv");
    assert!(matches!(result, Err(TableScopeError::Io { .. })));
}

#[test]
fn test_quoted_cells() {
    let profile = Profiler::new()
        .profile("\"city\",\"population\"\n\"Oslo\",\"709000\"\n\"Bergen\",\"291000\"")
        .unwrap();

    assert_eq!(profile.column_names(), vec!["city", "population"]);
    assert_eq!(
        profile.column("population").unwrap().column_type,
        ColumnType::Numeric
    );
}

// =============================================================================
// Type Inference Tests
// =============================================================================

#[test]
fn test_all_numeric_column_has_stats() {
    let profile = Profiler::new()
        .profile("x,y\n1.5,10\n2.5,20\n-3,30\n4e1,40")
        .unwrap();

    for column in &profile.columns {
        assert_eq!(column.column_type, ColumnType::Numeric, "{}", column.name);
        assert!(column.stats.as_ref().and_then(|s| s.as_numeric()).is_some());
    }
}

#[test]
fn test_two_letter_flags_become_boolean() {
    let profile = Profiler::new()
        .profile("member\nY\nN\nY\nN\n")
        .unwrap();
    let member = profile.column("member").unwrap();

    assert_eq!(member.column_type, ColumnType::Boolean);
    let stats = member.stats.as_ref().unwrap().as_categorical().unwrap();
    assert_eq!(stats.unique_values, 2);
    assert_eq!(stats.value_counts["Y"], 2);
}

#[test]
fn test_mixed_string_column() {
    let profile = Profiler::new()
        .profile("code\nA1\n42\nB7\ntrue\n")
        .unwrap();
    assert_eq!(profile.column("code").unwrap().column_type, ColumnType::StringMixed);
}

#[test]
fn test_empty_column_has_no_stats() {
    let profile = Profiler::new().profile("a,b\n1,\n2,\n").unwrap();
    let b = profile.column("b").unwrap();

    assert_eq!(b.column_type, ColumnType::Empty);
    assert_eq!(b.missing_count, 2);
    assert!(b.stats.is_none());
}

// =============================================================================
// Statistics Tests
// =============================================================================

#[test]
fn test_numeric_stats_one_to_four() {
    let profile = Profiler::new().profile("v\n1\n2\n3\n4").unwrap();
    let stats = *profile.columns[0]
        .stats
        .as_ref()
        .unwrap()
        .as_numeric()
        .unwrap();

    assert_eq!(stats.mean, 2.5);
    assert_eq!(stats.median, 2.5);
    assert_eq!(stats.std_dev, 1.12);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 4.0);

    let raw = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!((raw.std_dev - 1.118_033_988_749_895).abs() < 1e-12);
}

#[test]
fn test_single_value_stats() {
    let profile = Profiler::new().profile("v\n5\n").unwrap();
    let stats = profile.columns[0].stats.as_ref().unwrap().as_numeric().unwrap();

    assert_eq!(stats.mean, 5.0);
    assert_eq!(stats.median, 5.0);
    assert_eq!(stats.min, 5.0);
    assert_eq!(stats.max, 5.0);
}

#[test]
fn test_extreme_values_serialize_as_numbers() {
    let profile = Profiler::new().profile("v\n-1.7e308\n1.7e308").unwrap();
    let stats = *profile.columns[0].stats.as_ref().unwrap().as_numeric().unwrap();

    assert_eq!(stats.mean, 0.0);
    assert_eq!(stats.min, -1.7e308);
    assert_eq!(stats.max, 1.7e308);
    assert!(stats.std_dev.is_finite() && stats.std_dev > 0.0);

    let json = serde_json::to_value(&profile).unwrap();
    for key in ["mean", "median", "stdDev", "min", "max"] {
        assert!(json["columns"][0]["stats"][key].is_number(), "{key}");
    }
}

#[test]
fn test_odd_median() {
    let profile = Profiler::new().profile("v\n3\n2\n10").unwrap();
    let stats = profile.columns[0].stats.as_ref().unwrap().as_numeric().unwrap();
    assert_eq!(stats.median, 3.0);
}

#[test]
fn test_custom_rounding() {
    let profiler = Profiler::with_config(ProfilerConfig {
        decimals: 4,
        ..ProfilerConfig::default()
    });
    let profile = profiler.profile("v\n2\n3\n4\n5").unwrap();
    let stats = profile.columns[0].stats.as_ref().unwrap().as_numeric().unwrap();
    assert_eq!(stats.std_dev, 1.118);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_row_length_issue() {
    let profile = Profiler::new().profile("a,b,c\n1,2\n4,5,6").unwrap();

    assert_eq!(profile.issues.len(), 1);
    let issue = &profile.issues[0];
    assert_eq!(issue.issue_type, IssueType::InconsistentRowLength);
    assert_eq!(issue.row, 2);
    assert_eq!(issue.expected_cells, Some(3));
    assert_eq!(issue.found_cells, Some(2));
}

#[test]
fn test_mixed_type_issue() {
    let profile = Profiler::new()
        .profile("name,age\nAlice,30\nBob,N/A\nCarol,41\nDan,35")
        .unwrap();

    let age = profile.column("age").unwrap();
    assert_eq!(age.column_type, ColumnType::StringMixed);
    assert!(profile.issues.is_empty());

    // Numeric with boolean tokens stays numeric, so the stray text is flagged.
    let profile = Profiler::new()
        .profile("name,score\nAlice,0\nBob,yes\nCarol,17\nDan,1")
        .unwrap();
    assert_eq!(profile.column("score").unwrap().column_type, ColumnType::Numeric);
    assert_eq!(profile.issues.len(), 1);

    let issue = &profile.issues[0];
    assert_eq!(issue.issue_type, IssueType::MixedDataType);
    assert_eq!(issue.row, 3);
    assert_eq!(issue.column.as_deref(), Some("score"));
    assert_eq!(issue.value.as_deref(), Some("yes"));
}

#[test]
fn test_mixed_type_beyond_type_sample() {
    let profiler = Profiler::with_config(ProfilerConfig {
        type_sample_rows: Some(3),
        ..ProfilerConfig::default()
    });
    let profile = profiler
        .profile("name,age\nAlice,30\nBob,25\nCarol,41\nDan,N/A\nEve,52")
        .unwrap();

    let age = profile.column("age").unwrap();
    assert_eq!(age.column_type, ColumnType::Numeric);
    assert_eq!(age.stats.as_ref().unwrap().as_numeric().unwrap().max, 52.0);

    assert_eq!(profile.issues.len(), 1);
    let issue = &profile.issues[0];
    assert_eq!(issue.issue_type, IssueType::MixedDataType);
    assert_eq!(issue.row, 5);
    assert_eq!(issue.column.as_deref(), Some("age"));
    assert_eq!(issue.value.as_deref(), Some("N/A"));
}

#[test]
fn test_issue_gate_digest() {
    let mut content = String::from("a,b\n");
    for _ in 0..8 {
        content.push_str("1\n");
    }
    let profile = Profiler::new().profile(&content).unwrap();
    let digest = profile.digest();

    assert!(digest.is_blocking());
    assert_eq!(digest.shown.len(), 5);
    assert_eq!(digest.remaining, 3);
    assert!(digest.to_string().contains("...and 3 more"));
}

#[test]
fn test_missing_count_invariant() {
    let profile = Profiler::new()
        .profile("a,b,c\n1,,x\n,2,\n3,4\n")
        .unwrap();

    for column in &profile.columns {
        assert!(column.missing_count <= column.total_rows);
        assert_eq!(column.has_missing_values, column.missing_count > 0);
    }
    assert_eq!(profile.column("c").unwrap().missing_count, 2);
}

#[test]
fn test_concurrent_profiles_are_independent() {
    let profiler = Profiler::new();
    let left = "a,b\n1,x\n2,y\n3,z";
    let right = "c\nyes\nno\n";

    let (first, second) = std::thread::scope(|s| {
        let first = s.spawn(|| profiler.profile(left).unwrap());
        let second = s.spawn(|| profiler.profile(right).unwrap());
        (first.join().unwrap(), second.join().unwrap())
    });

    assert_eq!(first, profiler.profile(left).unwrap());
    assert_eq!(second, profiler.profile(right).unwrap());
    assert_eq!(first.column_names(), vec!["a", "b"]);
    assert_eq!(second.column_names(), vec!["c"]);
    assert_ne!(first.fingerprint, second.fingerprint);
}

// =============================================================================
// Response Loop Tests
// =============================================================================

#[test]
fn test_response_replaces_dataset() {
    let profiler = Profiler::new();
    let before = profiler.profile("a,b,c\n1,2\n4,5,6").unwrap();
    assert!(!before.is_clean());

    let response = "I removed the malformed row.\n\n```csv\na,b,c\n4,5,6\n```";
    let outcome = profiler.apply_response(response);

    assert_eq!(outcome.text, "I removed the malformed row.");
    let after = outcome.dataset.replacement().expect("dataset replaced");
    assert!(after.is_clean());
    assert_ne!(after.fingerprint, before.fingerprint);
}

#[test]
fn test_response_rejects_bad_dataset() {
    let outcome = Profiler::new().apply_response("Here you go:\n```csv\nonly,a,header\n```");

    assert_eq!(outcome.text, "Here you go:");
    match outcome.dataset {
        DatasetUpdate::Rejected(e) => assert!(e.is_parse_failure()),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn test_response_without_dataset() {
    let chart = r#"{"type": "line", "data": [{"m": "Jan", "v": 3}], "categoryKey": "m", "dataKey": "v"}"#;
    let outcome = Profiler::new().apply_response(&format!("Trend:\n```json\n{chart}\n```"));

    assert!(matches!(outcome.dataset, DatasetUpdate::Unchanged));
    assert_eq!(outcome.text, "Trend:");
    assert!(outcome.chart.is_some());
}
