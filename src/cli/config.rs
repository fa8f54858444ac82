//! TOML configuration file support for power users.
//!
//! Instead of passing many CLI flags, users can specify settings in a
//! config file:
//!
//! ```toml
//! # cvpeak.toml
//! [analysis]
//! param_scan_limit = 64
//! min_valid_rows = 5
//! min_declared_chunk = 3
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use cvpeak::pipeline::AnalysisConfig;

/// Root configuration structure for cvpeak.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Analysis tunables.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

/// Resolve the analysis tunables from an optional config file path.
pub fn load_analysis_config(path: Option<PathBuf>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => Ok(Config::from_file(&path)?.analysis),
        None => Ok(AnalysisConfig::default()),
    }
}
