//! Result records and CSV persistence.
//!
//! The result file is the data contract between the runner and the
//! analyzer: UTF-8 with a byte-order mark, a header row, and a fixed column
//! order. Failure rows keep the probe metadata populated and leave the
//! judgment columns empty.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AnalysisError, AnalysisResult};
use crate::parse::ParsedReply;
use crate::probes::ProbeDef;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// One result row: a single (probe, sample) pair.
///
/// Field order here is the column order of the persisted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeRecord {
    pub module: u32,
    pub probe_type: String,
    pub sample_num: u32,
    pub is_valid_reasoning: Option<bool>,
    pub confidence_score: Option<f64>,
    pub fallacy_type: Option<String>,
    /// Ordered reasoning steps, serialized as a JSON array string.
    pub reasoning_chain: String,
    pub final_explanation: Option<String>,
    pub parse_success: bool,
    pub raw_response: String,
    pub prompt: String,
}

impl ProbeRecord {
    /// Build a record from a successfully parsed reply.
    pub fn success(
        probe: &ProbeDef,
        sample_num: u32,
        parsed: &ParsedReply,
        raw_response: String,
        prompt: String,
    ) -> Self {
        Self {
            module: probe.module,
            probe_type: probe.kind.to_string(),
            sample_num,
            is_valid_reasoning: parsed.is_valid_reasoning,
            confidence_score: parsed.confidence_score,
            fallacy_type: parsed.fallacy_type.as_ref().map(|label| label.as_string()),
            reasoning_chain: crate::parse::reasoning_chain_string(&parsed.reasoning_chain),
            final_explanation: parsed.final_explanation.clone(),
            parse_success: true,
            raw_response,
            prompt,
        }
    }

    /// Build a failure record. Probe metadata stays populated; the failure
    /// reason goes into the explanation column.
    pub fn failure(
        probe: &ProbeDef,
        sample_num: u32,
        explanation: String,
        raw_response: String,
        prompt: String,
    ) -> Self {
        Self {
            module: probe.module,
            probe_type: probe.kind.to_string(),
            sample_num,
            is_valid_reasoning: None,
            confidence_score: None,
            fallacy_type: None,
            reasoning_chain: String::new(),
            final_explanation: Some(explanation),
            parse_success: false,
            raw_response,
            prompt,
        }
    }

    /// The reasoning chain as an ordered list of steps.
    pub fn reasoning_steps(&self) -> Vec<String> {
        crate::parse::reasoning_chain_steps(&self.reasoning_chain)
    }
}

/// Result filename embedding the generation timestamp.
pub fn results_filename(now: DateTime<Local>) -> String {
    format!(
        "logic_fallacy_experiment_results_{}.csv",
        now.format("%Y%m%d-%H%M%S")
    )
}

/// Write all records as a CSV table with a UTF-8 byte-order mark.
pub fn write_records(path: &Path, records: &[ProbeRecord]) -> AnalysisResult<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    out.write_all(&UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = records.len(), "Result table written");
    Ok(())
}

/// Load a result table, tolerating the byte-order mark.
pub fn load_records(path: &Path) -> AnalysisResult<Vec<ProbeRecord>> {
    if !path.exists() {
        return Err(AnalysisError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;
    let content = bytes.strip_prefix(&UTF8_BOM).unwrap_or(&bytes);

    let mut reader = csv::Reader::from_reader(content);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    info!(path = %path.display(), rows = records.len(), "Result table loaded");
    Ok(records)
}
