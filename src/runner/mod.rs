//! The experiment loop.
//!
//! Strictly sequential: one call in flight at a time, a fixed pause after
//! each call. No failure is fatal to the run; transport errors and
//! unparseable replies both become failure rows and the loop proceeds.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::ExperimentConfig;
use crate::parse::{self, ReplyOutcome};
use crate::probes::ProbeDef;
use crate::prompt::build_prompt;
use crate::record::ProbeRecord;
use crate::spark::SparkClient;

/// Drives the probe battery against the endpoint and collects result rows.
pub struct ExperimentRunner {
    client: SparkClient,
    samples_per_probe: u32,
    call_delay: Duration,
}

impl ExperimentRunner {
    /// Create a new runner from a client and the experiment configuration.
    pub fn new(client: SparkClient, config: &ExperimentConfig) -> Self {
        Self {
            client,
            samples_per_probe: config.samples_per_probe,
            call_delay: Duration::from_millis(config.call_delay_ms),
        }
    }

    /// Run the full experiment over the given probes.
    ///
    /// Always returns every collected record, one per (probe, sample).
    pub async fn run(&self, probes: &[ProbeDef]) -> Vec<ProbeRecord> {
        let mut records = Vec::with_capacity(probes.len() * self.samples_per_probe as usize);
        let total = probes.len();

        for (index, probe) in probes.iter().enumerate() {
            info!(
                module = probe.module,
                probe = %probe.kind,
                position = index + 1,
                total,
                "Testing probe"
            );

            for sample in 1..=self.samples_per_probe {
                let record = self.run_sample(probe, sample).await;
                if record.parse_success {
                    info!(probe = %probe.kind, sample, "Sample recorded");
                } else {
                    warn!(
                        probe = %probe.kind,
                        sample,
                        reason = record.final_explanation.as_deref().unwrap_or("unknown"),
                        "Sample failed"
                    );
                }
                records.push(record);

                tokio::time::sleep(self.call_delay).await;
            }
        }

        records
    }

    /// Issue one prompt and coerce the reply into a record. Every failure
    /// path still produces a row with the probe metadata populated.
    async fn run_sample(&self, probe: &ProbeDef, sample_num: u32) -> ProbeRecord {
        let prompt = build_prompt(probe.text);

        let raw = match self.client.complete(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                return ProbeRecord::failure(
                    probe,
                    sample_num,
                    format!("API error: {}", e),
                    String::new(),
                    prompt,
                );
            }
        };

        match parse::parse_reply(&raw) {
            ReplyOutcome::Parsed(parsed) => {
                ProbeRecord::success(probe, sample_num, &parsed, raw, prompt)
            }
            ReplyOutcome::NoJsonFound => ProbeRecord::failure(
                probe,
                sample_num,
                parse::NO_JSON_FOUND.to_string(),
                raw,
                prompt,
            ),
            ReplyOutcome::ParseError(message) => ProbeRecord::failure(
                probe,
                sample_num,
                format!("JSON parse error: {}", message),
                raw,
                prompt,
            ),
        }
    }
}
