//! Core sample containers shared by the reader and analysis stages.

use serde::{Deserialize, Serialize};

/// A single measurement: one potential/current pair.
///
/// Both values are finite. Rows with missing or non-finite values are
/// dropped by the tabular reader and never reach analysis code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Applied potential, in the unit of the source file (typically volts).
    pub potential: f64,
    /// Measured current, in the unit of the source file (typically amperes).
    pub current: f64,
}

/// An ordered, immutable series of cleaned samples.
///
/// Owned exclusively by the pipeline run that produced it; never mutated
/// after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Build a series from cleaned samples.
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, in file order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The sample at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    /// Iterator over the potential column.
    pub fn potentials(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.potential)
    }

    /// Iterator over the current column.
    pub fn currents(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.current)
    }
}
