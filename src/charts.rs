//! Chart rendering for the analyzer.
//!
//! Three independent chart steps, each tolerant of empty input: an empty
//! dataset logs a skip and returns Ok instead of erroring. Output is PNG at
//! fixed resolutions.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::analysis::{ConfusionMatrix, ScoredRow};
use crate::error::{AnalysisError, AnalysisResult};

/// Fixed filename for the per-module accuracy bar chart.
pub const ACCURACY_BY_MODULE_PNG: &str = "accuracy_by_module.png";
/// Fixed filename for the confidence box plot.
pub const CONFIDENCE_DISTRIBUTION_PNG: &str = "confidence_distribution.png";
/// Fixed filename for the fallacy confusion heatmap.
pub const FALLACY_CONFUSION_PNG: &str = "fallacy_confusion_matrix.png";

fn chart_error(e: impl ToString) -> AnalysisError {
    AnalysisError::Chart {
        message: e.to_string(),
    }
}

/// Bar chart of accuracy per module, y axis fixed to [0, 1], with
/// percentage labels above each bar.
pub fn render_accuracy_by_module(path: &Path, data: &[(u32, f64)]) -> AnalysisResult<()> {
    if data.is_empty() {
        info!("No module accuracy data, skipping bar chart");
        return Ok(());
    }
    draw_accuracy_by_module(path, data).map_err(chart_error)?;
    info!(path = %path.display(), "Accuracy bar chart written");
    Ok(())
}

fn draw_accuracy_by_module(
    path: &Path,
    data: &[(u32, f64)],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Model accuracy by logic module", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0..data.len()).into_segmented(), 0.0..1.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Logic module")
        .y_desc("Accuracy")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => data
                .get(*i)
                .map(|(module, _)| format!("Module {}", module))
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(data.iter().enumerate().map(|(i, (_, accuracy))| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *accuracy),
            ],
            BLUE.mix(0.6).filled(),
        );
        bar.set_margin(0, 0, 12, 12);
        bar
    }))?;

    chart.draw_series(data.iter().enumerate().map(|(i, (_, accuracy))| {
        Text::new(
            format!("{:.1}%", accuracy * 100.0),
            (SegmentValue::CenterOf(i), (accuracy + 0.02).min(0.95)),
            ("sans-serif", 16),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Box plot of confidence score split by correctness (incorrect, correct).
pub fn render_confidence_boxplot(path: &Path, rows: &[ScoredRow]) -> AnalysisResult<()> {
    let has_confidence = rows.iter().any(|row| row.confidence_score.is_some());
    if !has_confidence {
        info!("No confidence data, skipping box plot");
        return Ok(());
    }
    draw_confidence_boxplot(path, rows).map_err(chart_error)?;
    info!(path = %path.display(), "Confidence box plot written");
    Ok(())
}

fn draw_confidence_boxplot(
    path: &Path,
    rows: &[ScoredRow],
) -> Result<(), Box<dyn std::error::Error>> {
    let categories = ["incorrect", "correct"];

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Confidence distribution by judgment correctness",
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(categories[..].into_segmented(), 0f32..1f32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Judgment correctness")
        .y_desc("Confidence score")
        .draw()?;

    for (index, correctness) in [false, true].into_iter().enumerate() {
        let values: Vec<f32> = rows
            .iter()
            .filter(|row| row.is_correct == correctness)
            .filter_map(|row| row.confidence_score)
            .map(|v| v as f32)
            .collect();
        if values.is_empty() {
            continue;
        }
        let quartiles = Quartiles::new(&values);
        chart.draw_series(std::iter::once(
            Boxplot::new_vertical(SegmentValue::CenterOf(&categories[index]), &quartiles)
                .width(40)
                .style(if correctness { GREEN } else { RED }),
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Heatmap of the fallacy confusion matrix, annotated with integer counts.
/// `None` (no eligible rows) skips rendering entirely.
pub fn render_confusion_heatmap(
    path: &Path,
    matrix: Option<&ConfusionMatrix>,
) -> AnalysisResult<()> {
    let matrix = match matrix {
        Some(matrix) => matrix,
        None => {
            info!("Confusion matrix is empty, skipping heatmap");
            return Ok(());
        }
    };
    draw_confusion_heatmap(path, matrix).map_err(chart_error)?;
    info!(path = %path.display(), "Confusion heatmap written");
    Ok(())
}

fn draw_confusion_heatmap(
    path: &Path,
    matrix: &ConfusionMatrix,
) -> Result<(), Box<dyn std::error::Error>> {
    let n_cols = matrix.reported_labels.len();
    let n_rows = matrix.true_labels.len();
    let max_count = matrix.max_count().max(1) as f64;

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fallacy identification confusion matrix", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(240)
        .build_cartesian_2d((0..n_cols).into_segmented(), (0..n_rows).into_segmented())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Model-reported fallacy type")
        .y_desc("True fallacy type")
        .x_labels(n_cols)
        .y_labels(n_rows)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => matrix
                .reported_labels
                .get(*i)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                matrix.true_labels.get(*i).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(matrix.counts.iter().enumerate().flat_map(|(row, counts)| {
        counts.iter().enumerate().map(move |(col, &count)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(col), SegmentValue::Exact(row)),
                    (SegmentValue::Exact(col + 1), SegmentValue::Exact(row + 1)),
                ],
                heat_color(count as f64 / max_count).filled(),
            )
        })
    }))?;

    chart.draw_series(matrix.counts.iter().enumerate().flat_map(|(row, counts)| {
        counts.iter().enumerate().map(move |(col, &count)| {
            Text::new(
                format!("{}", count),
                (SegmentValue::CenterOf(col), SegmentValue::CenterOf(row)),
                ("sans-serif", 18),
            )
        })
    }))?;

    root.present()?;
    Ok(())
}

/// White-to-blue ramp for heatmap cells, t in [0, 1].
fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;
    RGBColor(lerp(247, 8), lerp(251, 48), lerp(255, 107))
}
