//! cvPeak command-line interface.
//!
//! Thin front-end over the `cvpeak` library: batch analysis of measurement
//! files, preamble inspection, and synthetic demo-file generation.
//!
//! ```bash
//! # Analyze files and dump the full records as JSON
//! cvpeak analyze scan1.csv scan2.csv --json results.json
//!
//! # Inspect what the parser sees in a problematic file
//! cvpeak info scan1.csv
//!
//! # Generate a synthetic scan for smoke testing
//! cvpeak demo demo_cv_scan.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::init_logging(args.verbosity());
    cli::dispatch(args)
}
