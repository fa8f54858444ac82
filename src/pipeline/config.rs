use serde::Deserialize;

/// Tunables of the analysis pipeline.
///
/// Deserializable so the values can come from a `cvpeak.toml` file; every
/// field has a default matching the behavior of the source instrument
/// software.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of preamble lines scanned for instrument parameters.
    pub param_scan_limit: usize,

    /// Minimum number of valid rows required after cleaning.
    pub min_valid_rows: usize,

    /// Minimum chunk length (in samples) for the declared segmentation
    /// mode to be trusted over signal-direction analysis.
    pub min_declared_chunk: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            param_scan_limit: 64,
            min_valid_rows: 5,
            min_declared_chunk: 3,
        }
    }
}
