use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{Cycle, PeakResult, Segment, SegmentationOutcome};
use crate::decode::DetectedEncoding;
use crate::metadata::{ParameterSet, SweepSettings};
use crate::reader::ParseError;
use crate::series::SampleSeries;

/// Provenance stamp attached to every analysis record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// Producing tool and version.
    pub tool: String,
    /// UTC time the analysis ran.
    pub analyzed_at: DateTime<Utc>,
}

impl Provenance {
    pub(crate) fn now() -> Self {
        Self {
            tool: format!("cvpeak {}", env!("CARGO_PKG_VERSION")),
            analyzed_at: Utc::now(),
        }
    }
}

/// Immutable per-file analysis result.
///
/// Everything the presentation and export layers need, produced by one
/// pipeline run and owned exclusively by the caller that receives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// Name of the source file, as given by the caller.
    pub filename: String,
    /// Which decoding strategy produced the text.
    pub encoding: DetectedEncoding,
    /// Zero-based line index of the located data header row.
    pub header_row: usize,
    /// Raw instrument parameters from the preamble.
    pub parameters: ParameterSet,
    /// Typed view of the segmentation-relevant parameters.
    pub sweep: SweepSettings,
    /// Cleaned potential/current series.
    pub series: SampleSeries,
    /// Monotonic sweep legs.
    pub segments: Vec<Segment>,
    /// Full cycles assembled from consecutive leg pairs.
    pub cycles: Vec<Cycle>,
    /// Per-cycle oxidation/reduction peaks, parallel to `cycles`.
    pub peaks: Vec<PeakResult>,
    /// Which segmentation strategy ran, and why others were rejected.
    pub segmentation: SegmentationOutcome,
    /// Tool version and timestamp.
    pub provenance: Provenance,
}

impl FileAnalysis {
    /// The samples of cycle `k` as ordered `(potential, current)` pairs,
    /// ready for charting or export without further transformation.
    pub fn cycle_points(&self, k: usize) -> Option<Vec<(f64, f64)>> {
        let cycle = self.cycles.get(k)?;
        let samples = self.series.samples().get(cycle.start..cycle.end)?;
        Some(samples.iter().map(|s| (s.potential, s.current)).collect())
    }

    /// Serialize the record to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Result of one file within a batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Name of the source file.
    pub filename: String,
    /// The analysis, or the file-scoped error that stopped it.
    pub result: Result<FileAnalysis, ParseError>,
}

/// Read-only cross-file aggregation for comparison views.
///
/// Built explicitly by the caller from a finished batch; the pipeline
/// itself never mutates shared state across files.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// One entry per processed file, successes and failures alike.
    pub files: Vec<FileSummary>,
}

/// Condensed per-file entry of a [`BatchSummary`].
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    /// Name of the source file.
    pub filename: String,
    /// Number of sweep legs found (successful files only).
    pub segments: Option<usize>,
    /// Number of full cycles found (successful files only).
    pub cycles: Option<usize>,
    /// Per-cycle peaks (successful files only).
    pub peaks: Option<Vec<PeakResult>>,
    /// Failure reason, when the file could not be analyzed.
    pub error: Option<String>,
}

impl BatchSummary {
    /// Assemble the aggregation from per-file outcomes.
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let files = outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(analysis) => FileSummary {
                    filename: outcome.filename.clone(),
                    segments: Some(analysis.segments.len()),
                    cycles: Some(analysis.cycles.len()),
                    peaks: Some(analysis.peaks.clone()),
                    error: None,
                },
                Err(err) => FileSummary {
                    filename: outcome.filename.clone(),
                    segments: None,
                    cycles: None,
                    peaks: None,
                    error: Some(err.to_string()),
                },
            })
            .collect();
        Self { files }
    }
}
