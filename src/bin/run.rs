//! Runner binary: probes the endpoint with the full battery and writes the
//! timestamped result CSV.

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use logic_probe::config::{Config, LogFormat};
use logic_probe::record;
use logic_probe::{ExperimentRunner, SparkClient, PROBES};

/// Run the logic-probe experiment against the configured model endpoint.
#[derive(Parser, Debug)]
#[command(name = "run-experiment", version, about)]
struct Args {
    /// Samples per probe (overrides SAMPLES_PER_PROBE)
    #[arg(long)]
    samples: Option<u32>,

    /// Directory for the result CSV (overrides OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Only run the first N probes (smoke runs)
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(samples) = args.samples {
        config.experiment.samples_per_probe = samples;
    }
    if let Some(output_dir) = args.output_dir {
        config.experiment.output_dir = output_dir;
    }

    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.spark.model,
        base_url = %config.spark.base_url,
        samples_per_probe = config.experiment.samples_per_probe,
        "Experiment starting"
    );

    let client = SparkClient::new(&config.spark)?;
    let runner = ExperimentRunner::new(client, &config.experiment);

    let probes = match args.limit {
        Some(limit) => &PROBES[..limit.min(PROBES.len())],
        None => PROBES,
    };

    let records = runner.run(probes).await;

    if records.is_empty() {
        warn!("Experiment finished without collecting any records, nothing written");
        return Ok(());
    }

    let failures = records.iter().filter(|r| !r.parse_success).count();
    std::fs::create_dir_all(&config.experiment.output_dir)?;
    let path = config
        .experiment
        .output_dir
        .join(record::results_filename(Local::now()));
    record::write_records(&path, &records)?;

    info!(
        path = %path.display(),
        rows = records.len(),
        failures,
        "Experiment complete"
    );
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
