//! CSV persistence tests: the result table written to disk must reload with
//! the same row count and field values, and the file must carry the UTF-8
//! byte-order mark and the fixed column order.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use logic_probe::parse::ParsedReply;
use logic_probe::record::{load_records, write_records, ProbeRecord};
use logic_probe::PROBES;

fn sample_records() -> Vec<ProbeRecord> {
    let parsed = ParsedReply {
        is_valid_reasoning: Some(true),
        confidence_score: Some(0.9),
        fallacy_type: Some(logic_probe::fallacy::ReportedLabel::parse("NO_FALLACY")),
        reasoning_chain: vec!["step one".to_string(), "step two".to_string()],
        final_explanation: Some("valid modus ponens".to_string()),
    };
    vec![
        ProbeRecord::success(
            &PROBES[0],
            1,
            &parsed,
            "raw reply with, commas and \"quotes\"".to_string(),
            "the prompt".to_string(),
        ),
        ProbeRecord::failure(
            &PROBES[1],
            2,
            "API error: connection refused".to_string(),
            String::new(),
            "another prompt".to_string(),
        ),
    ]
}

#[test]
fn test_round_trip_preserves_rows_and_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    let written = sample_records();
    write_records(&path, &written).unwrap();
    let loaded = load_records(&path).unwrap();

    assert_eq!(loaded, written);
}

#[test]
fn test_reasoning_chain_round_trips_to_same_steps() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    write_records(&path, &sample_records()).unwrap();
    let loaded = load_records(&path).unwrap();

    assert_eq!(
        loaded[0].reasoning_steps(),
        vec!["step one".to_string(), "step two".to_string()]
    );
    assert!(loaded[1].reasoning_steps().is_empty());
}

#[test]
fn test_file_starts_with_bom_and_fixed_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    write_records(&path, &sample_records()).unwrap();
    let bytes = fs::read(&path).unwrap();

    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(
        header,
        "module,probe_type,sample_num,is_valid_reasoning,confidence_score,\
         fallacy_type,reasoning_chain,final_explanation,parse_success,raw_response,prompt"
    );
}

#[test]
fn test_failure_row_judgment_columns_reload_as_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    write_records(&path, &sample_records()).unwrap();
    let loaded = load_records(&path).unwrap();

    let failure = &loaded[1];
    assert!(!failure.parse_success);
    assert_eq!(failure.is_valid_reasoning, None);
    assert_eq!(failure.confidence_score, None);
    assert_eq!(failure.fallacy_type, None);
    assert_eq!(
        failure.final_explanation.as_deref(),
        Some("API error: connection refused")
    );
}
