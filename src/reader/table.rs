use log::debug;

use crate::series::{Sample, SampleSeries};

use super::{ParseError, CURRENT_MARKER, POTENTIAL_MARKER};

/// Parse the data block (header row onward) into a cleaned [`SampleSeries`].
///
/// The first row names the columns. The potential column is the first
/// whose trimmed name contains [`POTENTIAL_MARKER`]; the current column is
/// the first containing [`CURRENT_MARKER`]. A row is kept only when both
/// cells parse to finite numbers; fewer than `min_rows` surviving rows is
/// an [`ParseError::InsufficientData`] failure.
pub fn read_table(block: &str, min_rows: usize) -> Result<SampleSeries, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(block.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let potential_col = column_index(&headers, POTENTIAL_MARKER)?;
    let current_col = column_index(&headers, CURRENT_MARKER)?;
    debug!(
        "potential column {:?} (index {}), current column {:?} (index {})",
        headers[potential_col], potential_col, headers[current_col], current_col
    );

    let mut samples = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        let potential = parse_cell(record.get(potential_col));
        let current = parse_cell(record.get(current_col));
        match (potential, current) {
            (Some(potential), Some(current)) => samples.push(Sample { potential, current }),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!("dropped {} rows with missing or non-finite values", dropped);
    }

    if samples.len() < min_rows {
        return Err(ParseError::InsufficientData {
            found: samples.len(),
            required: min_rows,
        });
    }
    Ok(SampleSeries::new(samples))
}

fn column_index(headers: &[String], marker: &str) -> Result<usize, ParseError> {
    headers
        .iter()
        .position(|h| h.contains(marker))
        .ok_or_else(|| ParseError::ColumnNotRecognized {
            marker: marker.to_string(),
        })
}

/// Parse one cell, treating absent, unparseable, and non-finite values
/// alike as "no value".
fn parse_cell(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
