use log::debug;
use serde::{Deserialize, Serialize};

use crate::metadata::SweepSettings;
use crate::series::SampleSeries;

/// A half-open index range `[start, end)` covering one monotonic sweep leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// First sample index of the leg.
    pub start: usize,
    /// One past the last sample index of the leg.
    pub end: usize,
}

impl Segment {
    /// Number of samples in the leg.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range is empty. Never true for emitted segments.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Which segmentation strategy produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationMode {
    /// Equal-length chunks sized from declared instrument parameters.
    DeclaredParameters,
    /// Direction reversals detected in the potential signal itself.
    SignalDirection,
}

/// The strategy that was committed to, plus why the others were rejected.
///
/// Strategies are tried in a fixed order and the first success wins;
/// every failure reason is retained here instead of being discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationOutcome {
    /// Strategy whose segments were kept.
    pub mode: SegmentationMode,
    /// Rendered rejection reason for each strategy tried before it.
    pub rejected: Vec<String>,
}

/// Why the declared-parameter strategy could not be used.
#[derive(Debug, thiserror::Error)]
pub enum DeclaredRejection {
    /// One or more required parameters are absent or unparseable.
    #[error("declared segmentation unavailable, missing: {0}")]
    MissingParameters(String),

    /// The declared potential window has no width.
    #[error("declared potential range is empty: high {high} <= low {low}")]
    EmptyRange {
        /// Declared upper bound.
        high: f64,
        /// Declared lower bound.
        low: f64,
    },

    /// The declared sampling interval cannot size a chunk.
    #[error("declared sample interval {0} is not positive")]
    NonPositiveInterval(f64),

    /// A declared segment count of zero describes no sweep at all.
    #[error("declared sweep segment count is zero")]
    ZeroSegments,

    /// The chunk implied by the declared values is too short to trust.
    #[error("declared chunk length {chunk} is below the plausibility threshold {min}")]
    ImplausibleChunk {
        /// Samples per leg implied by the declared values.
        chunk: usize,
        /// Configured minimum.
        min: usize,
    },
}

/// Segment `series`, preferring the declared-parameter strategy and
/// falling back to signal-direction analysis.
///
/// The declared strategy is used only when all four required parameters
/// are present and yield a plausible chunk of at least
/// `min_declared_chunk` samples; otherwise the signal-direction method
/// runs unconditionally. Rejection reasons of strategies not committed to
/// are retained in the returned outcome for diagnostics.
pub fn segment(
    series: &SampleSeries,
    sweep: &SweepSettings,
    min_declared_chunk: usize,
) -> (Vec<Segment>, SegmentationOutcome) {
    let mut rejected = Vec::new();

    match segment_by_declared(series, sweep, min_declared_chunk) {
        Ok(segments) => {
            debug!("segmented by declared parameters: {} legs", segments.len());
            let outcome = SegmentationOutcome {
                mode: SegmentationMode::DeclaredParameters,
                rejected,
            };
            return (segments, outcome);
        }
        Err(reason) => {
            debug!("declared-parameter segmentation rejected: {}", reason);
            rejected.push(reason.to_string());
        }
    }

    let segments = segment_by_direction(series);
    debug!("segmented by signal direction: {} legs", segments.len());
    let outcome = SegmentationOutcome {
        mode: SegmentationMode::SignalDirection,
        rejected,
    };
    (segments, outcome)
}

/// Partition the series at every genuine direction reversal of the
/// potential signal.
///
/// The sign of each consecutive difference is classified as -1, 0, or +1.
/// A boundary is placed where a nonzero sign differs from the previous
/// nonzero sign, i.e. at the first sample the new direction moves away
/// from. Flat runs (zero differences) never create boundaries on their
/// own; a flat run adjacent to a reversal stays with the segment on its
/// preceding side.
///
/// A series with no reversals yields exactly one whole-series segment,
/// a valid degenerate result rather than an error.
pub fn segment_by_direction(series: &SampleSeries) -> Vec<Segment> {
    let potentials: Vec<f64> = series.potentials().collect();
    let n = potentials.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![Segment { start: 0, end: 1 }];
    }

    let mut boundaries = Vec::new();
    let mut prev_sign = 0i8;
    for i in 0..n - 1 {
        let diff = potentials[i + 1] - potentials[i];
        let sign = if diff > 0.0 {
            1
        } else if diff < 0.0 {
            -1
        } else {
            0
        };
        if sign == 0 {
            continue;
        }
        if prev_sign != 0 && sign != prev_sign {
            boundaries.push(i);
        }
        prev_sign = sign;
    }

    let mut segments = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;
    for boundary in boundaries {
        segments.push(Segment { start, end: boundary });
        start = boundary;
    }
    segments.push(Segment { start, end: n });
    segments
}

/// Divide the series into the declared number of equal-length chunks.
///
/// Chunk length is the number of samples implied by the declared potential
/// window and sampling interval. The strategy refuses, rather than
/// guessing, when any required parameter is absent, the declared values
/// are degenerate, or the implied chunk is shorter than `min_chunk`
/// samples. The final chunk absorbs any remainder so the segments always
/// cover the whole series.
pub fn segment_by_declared(
    series: &SampleSeries,
    sweep: &SweepSettings,
    min_chunk: usize,
) -> Result<Vec<Segment>, DeclaredRejection> {
    let missing = sweep.missing_for_segmentation();
    let (Some(high), Some(low), Some(interval), Some(count)) = (
        sweep.high_potential,
        sweep.low_potential,
        sweep.sample_interval,
        sweep.sweep_segments,
    ) else {
        return Err(DeclaredRejection::MissingParameters(missing.join(", ")));
    };

    if interval <= 0.0 {
        return Err(DeclaredRejection::NonPositiveInterval(interval));
    }
    if high <= low {
        return Err(DeclaredRejection::EmptyRange { high, low });
    }
    if count == 0 {
        return Err(DeclaredRejection::ZeroSegments);
    }

    let chunk = ((high - low) / interval).round() as usize;
    if chunk < min_chunk {
        return Err(DeclaredRejection::ImplausibleChunk {
            chunk,
            min: min_chunk,
        });
    }

    let n = series.len();
    let count = count as usize;
    let mut segments = Vec::with_capacity(count);
    for k in 0..count {
        let start = k * chunk;
        if start >= n {
            break;
        }
        let end = if k + 1 == count {
            n
        } else {
            ((k + 1) * chunk).min(n)
        };
        segments.push(Segment { start, end });
    }
    Ok(segments)
}
