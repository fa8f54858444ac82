use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use cvpeak::analysis::SegmentationMode;
use cvpeak::pipeline::{process_batch, BatchOutcome, BatchSummary, FileAnalysis};

use super::config::load_analysis_config;

#[cfg(feature = "colorized_output")]
use console::style;

/// JSON envelope for one file of a batch.
#[derive(Serialize)]
struct JsonEntry<'a> {
    filename: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a FileAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Analyze one or more measurement files and print per-file summaries.
pub fn run(files: Vec<PathBuf>, json: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let analysis_config = load_analysis_config(config)?;

    let mut loaded: Vec<(Vec<u8>, String)> = Vec::with_capacity(files.len());
    for path in &files {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        loaded.push((bytes, path.display().to_string()));
    }

    let outcomes = process_batch(
        loaded.iter().map(|(bytes, name)| (bytes.as_slice(), name.as_str())),
        &analysis_config,
    );

    for outcome in &outcomes {
        print_outcome(outcome);
    }

    if let Some(out) = json {
        write_json(&outcomes, &out)?;
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    let failed = summary.files.iter().filter(|f| f.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} files could not be analyzed", failed, outcomes.len());
    }
    Ok(())
}

fn print_outcome(outcome: &BatchOutcome) {
    match &outcome.result {
        Ok(analysis) => {
            print_heading(&outcome.filename, true);
            println!(
                "  {} samples, {} legs, {} cycles ({} segmentation)",
                analysis.series.len(),
                analysis.segments.len(),
                analysis.cycles.len(),
                mode_name(analysis.segmentation.mode)
            );
            for reason in &analysis.segmentation.rejected {
                println!("  note: {}", reason);
            }
            for (k, peaks) in analysis.peaks.iter().enumerate() {
                println!(
                    "  cycle {}: oxidation {:.4e} A at {:.4} V, reduction {:.4e} A at {:.4} V",
                    k + 1,
                    peaks.oxidation.current,
                    peaks.oxidation.potential,
                    peaks.reduction.current,
                    peaks.reduction.potential
                );
            }
        }
        Err(err) => {
            print_heading(&outcome.filename, false);
            println!("  error: {}", err);
        }
    }
    println!();
}

fn mode_name(mode: SegmentationMode) -> &'static str {
    match mode {
        SegmentationMode::DeclaredParameters => "declared-parameter",
        SegmentationMode::SignalDirection => "signal-direction",
    }
}

fn print_heading(filename: &str, ok: bool) {
    #[cfg(feature = "colorized_output")]
    {
        let mark = if ok {
            style("\u{2713}").green()
        } else {
            style("\u{2717}").red()
        };
        println!("[{}] {}", mark, style(filename).bold());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        let mark = if ok { "OK" } else { "FAIL" };
        println!("[{}] {}", mark, filename);
    }
}

fn write_json(outcomes: &[BatchOutcome], out: &Path) -> Result<()> {
    let entries: Vec<JsonEntry> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(analysis) => JsonEntry {
                filename: &outcome.filename,
                analysis: Some(analysis),
                error: None,
            },
            Err(err) => JsonEntry {
                filename: &outcome.filename,
                analysis: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    let json =
        serde_json::to_string_pretty(&entries).context("Failed to serialize analysis records")?;

    if out.as_os_str() == "-" {
        println!("{}", json);
    } else {
        std::fs::write(out, json)
            .with_context(|| format!("Failed to write JSON to {}", out.display()))?;
    }
    Ok(())
}
