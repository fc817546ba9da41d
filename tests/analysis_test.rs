//! Scoring and aggregation scenarios.

use pretty_assertions::assert_eq;

use logic_probe::analysis::score;
use logic_probe::record::ProbeRecord;
use logic_probe::PROBES;

/// A parsed row with the given judgment for the given probe type.
fn row(probe_type: &str, sample_num: u32, valid: Option<bool>, confidence: Option<f64>) -> ProbeRecord {
    let probe = PROBES
        .iter()
        .find(|probe| probe.kind == probe_type)
        .unwrap_or_else(|| panic!("unknown probe type {}", probe_type));
    ProbeRecord {
        module: probe.module,
        probe_type: probe_type.to_string(),
        sample_num,
        is_valid_reasoning: valid,
        confidence_score: confidence,
        fallacy_type: None,
        reasoning_chain: "[]".to_string(),
        final_explanation: None,
        parse_success: true,
        raw_response: String::new(),
        prompt: String::new(),
    }
}

fn row_with_fallacy(probe_type: &str, valid: Option<bool>, fallacy: &str) -> ProbeRecord {
    let mut record = row(probe_type, 1, valid, Some(0.8));
    record.fallacy_type = Some(fallacy.to_string());
    record
}

#[test]
fn test_control_probe_judged_valid_is_correct() {
    let records = vec![row("Modus Ponens (Control)", 1, Some(true), Some(0.9))];
    let report = score(&records, PROBES);

    assert_eq!(report.scored.len(), 1);
    assert!(report.scored[0].is_correct);
    assert_eq!(report.overall_accuracy, Some(1.0));
}

#[test]
fn test_fallacy_probe_judged_valid_is_incorrect() {
    let records = vec![row(
        "Affirming the Consequent (Fallacy)",
        1,
        Some(true),
        Some(0.9),
    )];
    let report = score(&records, PROBES);

    assert_eq!(report.scored.len(), 1);
    assert!(!report.scored[0].is_correct);
    assert_eq!(report.overall_accuracy, Some(0.0));
}

#[test]
fn test_null_judgment_counts_as_incorrect() {
    // A failed parse leaves is_valid_reasoning empty; the row still scores.
    let records = vec![row("Modus Ponens (Control)", 1, None, None)];
    let report = score(&records, PROBES);
    assert!(!report.scored[0].is_correct);
}

#[test]
fn test_paradox_rows_are_excluded_from_scoring() {
    let records = vec![
        row("Liar Paradox", 1, None, Some(0.5)),
        row("Curry's Paradox", 1, Some(false), Some(0.5)),
        row("Modus Tollens (Control)", 1, Some(true), Some(0.7)),
    ];
    let report = score(&records, PROBES);

    assert_eq!(report.scored.len(), 1);
    assert_eq!(report.scored[0].probe_type, "Modus Tollens (Control)");
    assert_eq!(report.overall_accuracy, Some(1.0));
}

#[test]
fn test_all_paradox_rows_yield_explicit_empty_result() {
    let records = vec![
        row("Liar Paradox", 1, None, Some(0.5)),
        row("Curry's Paradox", 1, None, Some(0.5)),
    ];
    let report = score(&records, PROBES);

    assert_eq!(report.overall_accuracy, None);
    assert!(report.scored.is_empty());
    assert!(report.accuracy_by_module.is_empty());
    assert!(report.accuracy_by_probe.is_empty());
    assert!(report.confidence_by_correctness.is_empty());
    assert!(report.confusion.is_none());
}

#[test]
fn test_accuracy_grouped_by_module() {
    let records = vec![
        row("Modus Ponens (Control)", 1, Some(true), Some(0.9)),
        row("Affirming the Consequent (Fallacy)", 1, Some(true), Some(0.9)),
        row("Gambler's Fallacy", 1, Some(false), Some(0.8)),
    ];
    let report = score(&records, PROBES);

    assert_eq!(
        report.accuracy_by_module,
        vec![(1, 0.5), (4, 1.0)]
    );
}

#[test]
fn test_accuracy_by_probe_sorted_descending() {
    let records = vec![
        row("Modus Ponens (Control)", 1, Some(false), Some(0.9)),
        row("Gambler's Fallacy", 1, Some(false), Some(0.8)),
        row("Base Rate Fallacy", 1, Some(true), Some(0.8)),
        row("Base Rate Fallacy", 2, Some(false), Some(0.8)),
    ];
    let report = score(&records, PROBES);

    let accuracies: Vec<f64> = report.accuracy_by_probe.iter().map(|(_, a)| *a).collect();
    assert_eq!(accuracies, vec![1.0, 0.5, 0.0]);
    assert_eq!(report.accuracy_by_probe[0].0, "Gambler's Fallacy");
}

#[test]
fn test_confidence_stats_grouped_by_correctness() {
    let records = vec![
        row("Modus Ponens (Control)", 1, Some(true), Some(0.8)),
        row("Modus Ponens (Control)", 2, Some(true), Some(0.6)),
        row("Modus Ponens (Control)", 3, Some(false), Some(0.9)),
        // No confidence on this row; it contributes to accuracy only.
        row("Modus Ponens (Control)", 4, Some(false), None),
    ];
    let report = score(&records, PROBES);

    assert_eq!(report.confidence_by_correctness.len(), 2);
    let (correctness, incorrect_stats) = &report.confidence_by_correctness[0];
    assert!(!correctness);
    assert_eq!(incorrect_stats.count, 1);
    assert_eq!(incorrect_stats.mean, 0.9);

    let (correctness, correct_stats) = &report.confidence_by_correctness[1];
    assert!(*correctness);
    assert_eq!(correct_stats.count, 2);
    assert!((correct_stats.mean - 0.7).abs() < 1e-9);
}

#[test]
fn test_confusion_matrix_counts_correctly_flagged_fallacies() {
    let records = vec![
        // Correctly flagged as fallacious, correct label reported.
        row_with_fallacy(
            "Affirming the Consequent (Fallacy)",
            Some(false),
            "AFFIRMING_THE_CONSEQUENT",
        ),
        // Correctly flagged, but the wrong label reported.
        row_with_fallacy("Gambler's Fallacy", Some(false), "BASE_RATE_FALLACY"),
        // Incorrectly judged valid; excluded from the matrix.
        row_with_fallacy("Base Rate Fallacy", Some(true), "NO_FALLACY"),
        // Control probe; ground truth is true, never in the matrix.
        row_with_fallacy("Modus Ponens (Control)", Some(true), "NO_FALLACY"),
    ];
    let report = score(&records, PROBES);

    let matrix = report.confusion.expect("matrix should exist");
    assert_eq!(
        matrix.true_labels,
        vec!["AFFIRMING_THE_CONSEQUENT", "GAMBLER_S_FALLACY"]
    );
    assert_eq!(
        matrix.reported_labels,
        vec!["AFFIRMING_THE_CONSEQUENT", "BASE_RATE_FALLACY"]
    );
    assert_eq!(matrix.counts, vec![vec![1, 0], vec![0, 1]]);
    assert_eq!(matrix.max_count(), 1);
}

#[test]
fn test_correctly_flagged_row_without_label_lands_in_unspecified_column() {
    // A judgment can be correct (is_valid_reasoning false) while the reply
    // omitted fallacy_type entirely. Such rows stay visible in the matrix
    // under an UNSPECIFIED column instead of being dropped.
    let records = vec![row("Gambler's Fallacy", 1, Some(false), Some(0.8))];
    let report = score(&records, PROBES);

    let matrix = report.confusion.expect("matrix should exist");
    assert_eq!(matrix.true_labels, vec!["GAMBLER_S_FALLACY"]);
    assert_eq!(matrix.reported_labels, vec!["UNSPECIFIED"]);
    assert_eq!(matrix.counts, vec![vec![1]]);
}

#[test]
fn test_confusion_matrix_skipped_when_no_eligible_rows() {
    // All fallacy probes judged valid: genuinely fallacious but never
    // correctly flagged, so the matrix has no rows.
    let records = vec![
        row_with_fallacy("Gambler's Fallacy", Some(true), "NO_FALLACY"),
        row("Modus Ponens (Control)", 1, Some(true), Some(0.9)),
    ];
    let report = score(&records, PROBES);
    assert!(report.confusion.is_none());
}

#[test]
fn test_scoring_is_idempotent() {
    let records = vec![
        row("Modus Ponens (Control)", 1, Some(true), Some(0.9)),
        row("Affirming the Consequent (Fallacy)", 1, Some(true), Some(0.9)),
        row_with_fallacy("Gambler's Fallacy", Some(false), "GAMBLER_S_FALLACY"),
        row("Liar Paradox", 1, None, None),
    ];

    let first = score(&records, PROBES);
    let second = score(&records, PROBES);

    assert_eq!(first.overall_accuracy, second.overall_accuracy);
    assert_eq!(first.accuracy_by_module, second.accuracy_by_module);
    assert_eq!(first.accuracy_by_probe, second.accuracy_by_probe);
    assert_eq!(
        first.confidence_by_correctness,
        second.confidence_by_correctness
    );
    assert_eq!(first.confusion, second.confusion);
}
