//! End-to-end analysis pipeline.
//!
//! One call runs decoding, preamble extraction, data-region location,
//! tabular reading, segmentation, cycle assembly, and peak extraction,
//! and returns an immutable per-file record. Batches run files
//! sequentially with no shared state; a failing file never aborts the
//! rest.

use log::{debug, info};

use crate::analysis::{assemble, extract, segment};
use crate::decode::decode;
use crate::metadata::{ParameterSet, SweepSettings};
use crate::reader::{find_header_row, read_table, ParseError};

mod config;
mod result;


pub use config::AnalysisConfig;
pub use result::{BatchOutcome, BatchSummary, FileAnalysis, FileSummary, Provenance};

/// Run the full pipeline over one file's raw bytes.
///
/// Deterministic over its input: identical bytes yield identical cycles
/// and peaks, so there is no retry logic anywhere in the pipeline.
pub fn process(
    bytes: &[u8],
    filename: &str,
    config: &AnalysisConfig,
) -> Result<FileAnalysis, ParseError> {
    let (text, encoding) = decode(bytes);
    let lines: Vec<&str> = text.lines().collect();

    let header_row = find_header_row(&lines).ok_or(ParseError::HeaderNotFound)?;
    debug!("{}: data header row at line {}", filename, header_row + 1);

    // Preamble only; never scan into the data block.
    let parameters = ParameterSet::extract(&lines[..header_row], config.param_scan_limit);
    let sweep = SweepSettings::from_params(&parameters);
    debug!(
        "{}: {} instrument parameters extracted",
        filename,
        parameters.len()
    );

    let block = lines[header_row..].join("\n");
    let series = read_table(&block, config.min_valid_rows)?;

    let (segments, segmentation) = segment(&series, &sweep, config.min_declared_chunk);
    let cycles = assemble(&segments);
    let peaks = cycles
        .iter()
        .filter_map(|cycle| extract(cycle, &series))
        .collect();

    info!(
        "{}: {} samples, {} legs, {} cycles ({:?} segmentation)",
        filename,
        series.len(),
        segments.len(),
        cycles.len(),
        segmentation.mode
    );

    Ok(FileAnalysis {
        filename: filename.to_string(),
        encoding,
        header_row,
        parameters,
        sweep,
        series,
        segments,
        cycles,
        peaks,
        segmentation,
        provenance: Provenance::now(),
    })
}

/// Process several files sequentially.
///
/// Fatal conditions are file-scoped: each file yields its own success or
/// failure, and the returned list is the only aggregation; no state is
/// carried between files. Callers wanting a comparison view build it from
/// this list with [`BatchSummary::from_outcomes`].
pub fn process_batch<'a, I>(files: I, config: &AnalysisConfig) -> Vec<BatchOutcome>
where
    I: IntoIterator<Item = (&'a [u8], &'a str)>,
{
    files
        .into_iter()
        .map(|(bytes, filename)| BatchOutcome {
            filename: filename.to_string(),
            result: process(bytes, filename, config),
        })
        .collect()
}
