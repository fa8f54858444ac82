use serde::{Deserialize, Serialize};

use crate::series::SampleSeries;

use super::Cycle;

/// One extremum of a cycle: the current value, the potential at which it
/// occurred, and its sample index within the whole series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakPoint {
    /// Sample index within the full series.
    pub index: usize,
    /// Potential at the extremum.
    pub potential: f64,
    /// Current at the extremum.
    pub current: f64,
}

/// Oxidation and reduction peaks of one cycle.
///
/// Derived and read-only; recomputed per cycle, never cached across
/// different cycle boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakResult {
    /// Maximum-current sample of the cycle.
    pub oxidation: PeakPoint,
    /// Minimum-current sample of the cycle.
    pub reduction: PeakPoint,
}

/// Locate the oxidation (maximum current) and reduction (minimum current)
/// peaks within one cycle.
///
/// Ties resolve to the earliest sample in index order. Returns `None`
/// only for an empty or out-of-range cycle, which assembled cycles never
/// are.
pub fn extract(cycle: &Cycle, series: &SampleSeries) -> Option<PeakResult> {
    let samples = series.samples().get(cycle.start..cycle.end)?;
    let first = samples.first()?;

    let mut oxidation = PeakPoint {
        index: cycle.start,
        potential: first.potential,
        current: first.current,
    };
    let mut reduction = oxidation;

    for (offset, sample) in samples.iter().enumerate().skip(1) {
        if sample.current > oxidation.current {
            oxidation = PeakPoint {
                index: cycle.start + offset,
                potential: sample.potential,
                current: sample.current,
            };
        }
        if sample.current < reduction.current {
            reduction = PeakPoint {
                index: cycle.start + offset,
                potential: sample.potential,
                current: sample.current,
            };
        }
    }

    Some(PeakResult {
        oxidation,
        reduction,
    })
}
