use serde::{Deserialize, Serialize};

use super::Segment;

/// A full voltammetric cycle: two consecutive sweep legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// First sample index of the cycle.
    pub start: usize,
    /// One past the last sample index of the cycle.
    pub end: usize,
}

impl Cycle {
    /// Number of samples spanned by the cycle.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range is empty. Never true for assembled cycles.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Pair consecutive segments two-at-a-time into full cycles.
///
/// Cycle `k` spans from the start of segment `2k` to the end of segment
/// `2k + 1`. A trailing unpaired segment is dropped; it never becomes a
/// partial cycle. Zero segments yields zero cycles.
pub fn assemble(segments: &[Segment]) -> Vec<Cycle> {
    segments
        .chunks_exact(2)
        .map(|pair| Cycle {
            start: pair[0].start,
            end: pair[1].end,
        })
        .collect()
}
