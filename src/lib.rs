//! # Logic Probe
//!
//! An experiment harness that probes an LLM chat-completion endpoint with a
//! fixed battery of logic and reasoning prompts, records the model's
//! structured self-reported judgments, and scores them against known ground
//! truth.
//!
//! ## Components
//!
//! - **Runner** (`run-experiment`): iterates the probe battery, issues one
//!   prompt per probe per sample, coerces the free-text reply into a
//!   structured record, and appends rows to a timestamped CSV file.
//! - **Analyzer** (`analyze-results`): loads a result CSV, joins it against
//!   the ground truth carried on the probe definitions, computes accuracy
//!   and confidence statistics, and renders charts.
//!
//! ## Architecture
//!
//! ```text
//! run-experiment → Spark endpoint (HTTP) → results CSV → analyze-results → PNGs
//! ```
//!
//! Data flows one way: the runner produces a file, the analyzer consumes it.
//! There is no shared in-memory state and no concurrency; one call is in
//! flight at a time with a fixed delay between calls.
//!
//! ## Example
//!
//! ```ignore
//! use logic_probe::{Config, ExperimentRunner, SparkClient, PROBES};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = SparkClient::new(&config.spark)?;
//!     let runner = ExperimentRunner::new(client, &config.experiment);
//!     let records = runner.run(PROBES).await;
//!     logic_probe::record::write_records("results.csv".as_ref(), &records)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Scoring, aggregation, and confusion analysis over result tables.
pub mod analysis;
/// Chart rendering (accuracy bars, confidence box plot, confusion heatmap).
pub mod charts;
/// Configuration management loaded from environment variables.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// The closed fallacy-label enumeration and reported-label validation.
pub mod fallacy;
/// Response extraction and defensive parsing of model replies.
pub mod parse;
/// Probe battery definitions with colocated ground truth.
pub mod probes;
/// Prompt construction for the unified probe instruction.
pub mod prompt;
/// Result records and CSV persistence.
pub mod record;
/// The sequential experiment loop.
pub mod runner;
/// Spark chat-completion HTTP client and wire types.
pub mod spark;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use probes::{ProbeDef, PROBES};
pub use record::ProbeRecord;
pub use runner::ExperimentRunner;
pub use spark::SparkClient;
