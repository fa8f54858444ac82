use anyhow::{Context, Result};
use std::path::PathBuf;

use cvpeak::decode::{decode, DetectedEncoding};
use cvpeak::metadata::{ParameterSet, SweepSettings};
use cvpeak::reader::find_header_row;

use super::config::load_analysis_config;

/// Show preamble diagnostics for a measurement file.
pub fn run(file: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let analysis_config = load_analysis_config(config)?;

    let bytes = std::fs::read(&file)
        .with_context(|| format!("Failed to read input file: {}", file.display()))?;
    let (text, encoding) = decode(&bytes);
    let lines: Vec<&str> = text.lines().collect();

    println!("cvPeak File Information");
    println!("=======================");
    println!("File: {}", file.display());
    println!(
        "Encoding: {}",
        match encoding {
            DetectedEncoding::Utf8 => "UTF-8",
            DetectedEncoding::GbkLossy => "GBK (lossy fallback)",
        }
    );
    println!("Lines: {}", lines.len());
    println!();

    match find_header_row(&lines) {
        Some(row) => {
            println!("Data header row: line {}", row + 1);
            if let Some(header) = lines.get(row) {
                println!("  {}", header.trim());
            }
            let params = ParameterSet::extract(&lines[..row], analysis_config.param_scan_limit);
            print_params(&params);
        }
        None => {
            println!("Data header row: not found");
            let params = ParameterSet::extract(&lines, analysis_config.param_scan_limit);
            print_params(&params);
        }
    }
    Ok(())
}

fn print_params(params: &ParameterSet) {
    println!();
    println!("Instrument Parameters ({}):", params.len());
    for (key, value) in params.iter() {
        println!("  {}: {}", key, value);
    }

    let sweep = SweepSettings::from_params(params);
    println!();
    println!("Recognized Sweep Settings:");
    print_setting("Init E", sweep.init_potential);
    print_setting("High E", sweep.high_potential);
    print_setting("Low E", sweep.low_potential);
    print_setting("Sample Interval", sweep.sample_interval);
    match sweep.sweep_segments {
        Some(count) => println!("  Sweep Segments: {}", count),
        None => println!("  Sweep Segments: <absent>"),
    }
}

fn print_setting(name: &str, value: Option<f64>) {
    match value {
        Some(v) => println!("  {}: {}", name, v),
        None => println!("  {}: <absent>", name),
    }
}
