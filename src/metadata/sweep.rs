use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParameterSet;

/// Typed view of the instrument parameters the segmenter can use.
///
/// Every field is optional: a missing or unparseable parameter stays
/// `None` and is never substituted with a numeric default, so absent
/// values can never silently corrupt segment-length math.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepSettings {
    /// Declared initial potential.
    pub init_potential: Option<f64>,
    /// Declared upper potential bound of the sweep.
    pub high_potential: Option<f64>,
    /// Declared lower potential bound of the sweep.
    pub low_potential: Option<f64>,
    /// Declared potential step between consecutive samples.
    pub sample_interval: Option<f64>,
    /// Declared number of monotonic sweep legs in the experiment.
    pub sweep_segments: Option<u32>,
}

impl SweepSettings {
    /// Pull the recognized parameters out of an extracted [`ParameterSet`].
    ///
    /// Keys are matched by case-insensitive substring, following the loose
    /// vocabulary of instrument export headers ("Init E (V)",
    /// "Init E (mV)", "Sweep Segments", ...). Values are kept in the unit
    /// the file declares; no conversion is applied.
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            init_potential: parse_value(params.get_containing("init e")),
            high_potential: parse_value(params.get_containing("high e")),
            low_potential: parse_value(params.get_containing("low e")),
            sample_interval: parse_value(params.get_containing("sample interval")),
            sweep_segments: parse_value(params.get_containing("segment")),
        }
    }

    /// Names of the parameters the declared segmentation mode still needs.
    ///
    /// Empty exactly when the declared mode has everything it requires.
    pub fn missing_for_segmentation(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.high_potential.is_none() {
            missing.push("high potential");
        }
        if self.low_potential.is_none() {
            missing.push("low potential");
        }
        if self.sample_interval.is_none() {
            missing.push("sample interval");
        }
        if self.sweep_segments.is_none() {
            missing.push("sweep segment count");
        }
        missing
    }
}

fn parse_value<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|v| v.trim().parse().ok())
}
