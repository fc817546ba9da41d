//! Analyzer binary: loads a result CSV, scores it against ground truth,
//! prints the statistics, and renders charts.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use logic_probe::analysis::{self, ScoreReport};
use logic_probe::charts;
use logic_probe::error::AnalysisError;
use logic_probe::{record, PROBES};

/// Analyze a logic-probe result CSV.
#[derive(Parser, Debug)]
#[command(name = "analyze-results", version, about)]
struct Args {
    /// Path to the result CSV produced by run-experiment
    csv: PathBuf,

    /// Directory for the chart PNGs
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let records = match record::load_records(&args.csv) {
        Ok(records) => records,
        Err(AnalysisError::MissingInput { path }) => {
            // Abort cleanly: report to the operator, generate no charts.
            eprintln!(
                "Error: result file '{}' not found. Check the filename and run again.",
                path.display()
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let report = analysis::score(&records, PROBES);
    print_report(&report);

    if !args.no_charts {
        std::fs::create_dir_all(&args.output_dir)?;
        charts::render_accuracy_by_module(
            &args.output_dir.join(charts::ACCURACY_BY_MODULE_PNG),
            &report.accuracy_by_module,
        )?;
        charts::render_confidence_boxplot(
            &args.output_dir.join(charts::CONFIDENCE_DISTRIBUTION_PNG),
            &report.scored,
        )?;
        charts::render_confusion_heatmap(
            &args.output_dir.join(charts::FALLACY_CONFUSION_PNG),
            report.confusion.as_ref(),
        )?;
    }

    print_qualitative_hints();
    Ok(())
}

fn print_report(report: &ScoreReport) {
    println!("--- Quantitative analysis ---");
    match report.overall_accuracy {
        Some(accuracy) => println!(
            "[*] Overall accuracy (non-paradox probes): {:.2}%",
            accuracy * 100.0
        ),
        None => println!("[*] Overall accuracy: no ground-truth-eligible rows"),
    }

    if !report.accuracy_by_module.is_empty() {
        println!("\n[*] Accuracy by module:");
        for (module, accuracy) in &report.accuracy_by_module {
            println!("    Module {}: {:.2}%", module, accuracy * 100.0);
        }
    }

    if !report.accuracy_by_probe.is_empty() {
        println!("\n[*] Accuracy by probe type:");
        for (kind, accuracy) in &report.accuracy_by_probe {
            println!("    {:<40} {:.2}%", kind, accuracy * 100.0);
        }
    }

    if !report.confidence_by_correctness.is_empty() {
        println!("\n[*] Confidence by correctness:");
        println!(
            "    {:<10} {:>5} {:>7} {:>7} {:>6} {:>6} {:>6} {:>6} {:>6}",
            "correct", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        );
        for (correctness, stats) in &report.confidence_by_correctness {
            println!(
                "    {:<10} {:>5} {:>7.3} {:>7.3} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>6.2}",
                correctness,
                stats.count,
                stats.mean,
                stats.std,
                stats.min,
                stats.q1,
                stats.median,
                stats.q3,
                stats.max
            );
        }
    }

    match &report.confusion {
        Some(matrix) => {
            println!("\n[*] Fallacy confusion matrix (rows: true, columns: reported):");
            println!("    {:<30} {}", "", matrix.reported_labels.join("  "));
            for (row, true_label) in matrix.true_labels.iter().enumerate() {
                let cells: Vec<String> = matrix.counts[row]
                    .iter()
                    .zip(&matrix.reported_labels)
                    .map(|(count, label)| format!("{:>width$}", count, width = label.len()))
                    .collect();
                println!("    {:<30} {}", true_label, cells.join("  "));
            }
        }
        None => println!("\n[*] Fallacy confusion matrix: no eligible rows, skipped"),
    }
}

fn print_qualitative_hints() {
    println!("\n--- Qualitative analysis suggestions ---");
    println!("Review the CSV by hand with a focus on:");
    println!("1. The reasoning_chain and final_explanation of the paradox probes, to see how the model copes.");
    println!("2. Wrong judgments with high confidence (e.g. > 0.9): how the model errs confidently.");
    println!("3. Lucky hits: is_correct true but a muddled reasoning_chain.");
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
