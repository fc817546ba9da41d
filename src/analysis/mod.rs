//! Scoring and aggregation over a loaded result table.
//!
//! The ground truth comes from the probe definitions themselves; rows whose
//! probe type has no defined truth (paradoxes) are excluded from scoring.
//! Every aggregate degrades to an explicit empty result on empty input
//! instead of erroring.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::probes::ProbeDef;
use crate::record::ProbeRecord;

/// One ground-truth-eligible row with its correctness flag attached.
#[derive(Debug, Clone)]
pub struct ScoredRow {
    pub module: u32,
    pub probe_type: String,
    pub confidence_score: Option<f64>,
    pub reported_fallacy: Option<String>,
    pub expected_fallacy: Option<String>,
    pub expected_valid: bool,
    pub is_correct: bool,
}

/// Descriptive statistics of a confidence sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Count matrix cross-tabulating true vs. reported fallacy labels,
/// restricted to correctly-flagged-as-fallacious rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    /// Row labels: expected fallacy types, sorted.
    pub true_labels: Vec<String>,
    /// Column labels: model-reported fallacy types, sorted.
    pub reported_labels: Vec<String>,
    /// counts[row][col], aligned with the label vectors.
    pub counts: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    /// Largest cell count, used for heatmap color scaling.
    pub fn max_count(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Full aggregation output for one result table.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// Ground-truth-eligible rows with correctness attached.
    pub scored: Vec<ScoredRow>,
    /// Overall mean correctness; `None` when no eligible rows exist.
    pub overall_accuracy: Option<f64>,
    /// Mean correctness per module, sorted by module id.
    pub accuracy_by_module: Vec<(u32, f64)>,
    /// Mean correctness per probe type, sorted descending by accuracy.
    pub accuracy_by_probe: Vec<(String, f64)>,
    /// Confidence statistics grouped by correctness (false first).
    pub confidence_by_correctness: Vec<(bool, ConfidenceStats)>,
    /// Fallacy confusion matrix; `None` when no eligible rows exist.
    pub confusion: Option<ConfusionMatrix>,
}

/// Score a result table against the ground truth carried on the probes.
///
/// Repeated calls over the same table yield identical numbers.
pub fn score(records: &[ProbeRecord], probes: &[ProbeDef]) -> ScoreReport {
    let truth: HashMap<&str, bool> = probes
        .iter()
        .filter_map(|probe| probe.expected_valid.map(|valid| (probe.kind, valid)))
        .collect();
    let expected_fallacies: HashMap<&str, String> = probes
        .iter()
        .filter_map(|probe| {
            probe
                .expected_fallacy
                .map(|label| (probe.kind, label.as_str().to_string()))
        })
        .collect();

    let scored: Vec<ScoredRow> = records
        .iter()
        .filter_map(|record| {
            let expected_valid = *truth.get(record.probe_type.as_str())?;
            Some(ScoredRow {
                module: record.module,
                probe_type: record.probe_type.clone(),
                confidence_score: record.confidence_score,
                reported_fallacy: record.fallacy_type.clone(),
                expected_fallacy: expected_fallacies.get(record.probe_type.as_str()).cloned(),
                expected_valid,
                is_correct: record.is_valid_reasoning == Some(expected_valid),
            })
        })
        .collect();

    ScoreReport {
        overall_accuracy: mean_correct(&scored),
        accuracy_by_module: accuracy_by_module(&scored),
        accuracy_by_probe: accuracy_by_probe(&scored),
        confidence_by_correctness: confidence_by_correctness(&scored),
        confusion: confusion_matrix(&scored),
        scored,
    }
}

fn mean_correct(rows: &[ScoredRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let correct = rows.iter().filter(|row| row.is_correct).count();
    Some(correct as f64 / rows.len() as f64)
}

fn accuracy_by_module(rows: &[ScoredRow]) -> Vec<(u32, f64)> {
    let mut groups: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.module).or_default();
        entry.1 += 1;
        if row.is_correct {
            entry.0 += 1;
        }
    }
    groups
        .into_iter()
        .map(|(module, (correct, total))| (module, correct as f64 / total as f64))
        .collect()
}

fn accuracy_by_probe(rows: &[ScoredRow]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.probe_type.as_str()).or_default();
        entry.1 += 1;
        if row.is_correct {
            entry.0 += 1;
        }
    }
    let mut accuracies: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(kind, (correct, total))| (kind.to_string(), correct as f64 / total as f64))
        .collect();
    // Descending by accuracy; the BTreeMap ordering keeps ties stable.
    accuracies.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    accuracies
}

fn confidence_by_correctness(rows: &[ScoredRow]) -> Vec<(bool, ConfidenceStats)> {
    let mut out = Vec::new();
    for correctness in [false, true] {
        let sample: Vec<f64> = rows
            .iter()
            .filter(|row| row.is_correct == correctness)
            .filter_map(|row| row.confidence_score)
            .collect();
        if let Some(stats) = describe(&sample) {
            out.push((correctness, stats));
        }
    }
    out
}

/// Rows that are genuinely a fallacy (ground truth false) and were
/// correctly judged as such, cross-tabulated expected vs. reported label.
fn confusion_matrix(rows: &[ScoredRow]) -> Option<ConfusionMatrix> {
    let mut cells: BTreeMap<(String, String), u64> = BTreeMap::new();
    for row in rows {
        if row.expected_valid || !row.is_correct {
            continue;
        }
        let expected = match &row.expected_fallacy {
            Some(expected) => expected.clone(),
            None => continue,
        };
        let reported = row
            .reported_fallacy
            .clone()
            .unwrap_or_else(|| "UNSPECIFIED".to_string());
        *cells.entry((expected, reported)).or_default() += 1;
    }

    if cells.is_empty() {
        return None;
    }

    let true_labels: Vec<String> = cells
        .keys()
        .map(|(expected, _)| expected.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let reported_labels: Vec<String> = cells
        .keys()
        .map(|(_, reported)| reported.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let counts = true_labels
        .iter()
        .map(|expected| {
            reported_labels
                .iter()
                .map(|reported| {
                    cells
                        .get(&(expected.clone(), reported.clone()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    Some(ConfusionMatrix {
        true_labels,
        reported_labels,
        counts,
    })
}

/// Descriptive statistics over a sample; `None` on an empty sample.
fn describe(sample: &[f64]) -> Option<ConfidenceStats> {
    if sample.is_empty() {
        return None;
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = if count < 2 {
        0.0
    } else {
        let variance =
            sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count as f64 - 1.0);
        variance.sqrt()
    };

    Some(ConfidenceStats {
        count,
        mean,
        std,
        min: sorted[0],
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Linear-interpolated percentile over an already sorted sample.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = rank - lower as f64;
    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}
