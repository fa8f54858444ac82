//! # cvPeak - Cyclic-Voltammetry Sweep Analysis
//!
//! `cvpeak` ingests the loosely structured text/CSV files written by
//! electrochemical workstations, locates the embedded instrument header and
//! tabular data region, reconstructs the sweep legs of the experiment from
//! the numeric behavior of the potential column (or from declared instrument
//! parameters), regroups legs into full cycles, and reports the oxidation
//! and reduction peak of every cycle.
//!
//! ## Key Features
//!
//! - **Tolerant input handling**: the data region is found by its column
//!   vocabulary, not by position, so an unbounded preamble of instrument
//!   parameters never breaks parsing. Decoding falls back from strict UTF-8
//!   to GBK and never fails.
//!
//! - **Two segmentation strategies**: equal-length chunks sized from the
//!   declared instrument parameters when all of them are present and
//!   plausible, otherwise direction-reversal analysis of the potential
//!   signal itself. The committed strategy and every rejection reason are
//!   recorded in the result for diagnostics.
//!
//! - **File-scoped failures**: an unparseable file produces a specific
//!   error ([`ParseError`]) naming what was missing, never partial or
//!   garbage data, and never aborts the other files of a batch.
//!
//! ## Quick Start
//!
//! ```rust
//! use cvpeak::pipeline::{process, AnalysisConfig};
//!
//! let raw = b"Init E (V): -0.2\n\
//!             High E (V): 0.6\n\
//!             Low E (V): -0.2\n\
//!             \n\
//!             Potential/V, Current/A\n\
//!             -0.2, -1.2e-6\n\
//!             0.0, 0.8e-6\n\
//!             0.2, 2.4e-6\n\
//!             0.4, 1.1e-6\n\
//!             0.6, 0.9e-6\n\
//!             0.4, -0.3e-6\n\
//!             0.2, -2.1e-6\n\
//!             0.0, -0.9e-6\n\
//!             -0.2, -0.4e-6\n";
//!
//! let analysis = process(raw, "scan.csv", &AnalysisConfig::default())?;
//! assert_eq!(analysis.segments.len(), 2);
//! assert_eq!(analysis.cycles.len(), 1);
//!
//! let peaks = &analysis.peaks[0];
//! assert_eq!(peaks.oxidation.current, 2.4e-6);
//! assert_eq!(peaks.reduction.current, -2.1e-6);
//! # Ok::<(), cvpeak::ParseError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`decode`]: byte-to-text decoding with a legacy-encoding fallback
//! - [`metadata`]: instrument preamble extraction and typed sweep settings
//! - [`reader`]: data-region location and tabular reading
//! - [`analysis`]: segmentation, cycle assembly, and peak extraction
//! - [`pipeline`]: end-to-end orchestration and batch processing
//!
//! Results are plain serde-serializable records; charting, report
//! generation, and export layers consume them as JSON without further
//! transformation.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod decode;
pub mod metadata;
pub mod pipeline;
pub mod reader;
pub mod series;

pub use reader::ParseError;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::analysis::{
        assemble, extract, segment, Cycle, PeakPoint, PeakResult, Segment, SegmentationMode,
        SegmentationOutcome,
    };
    pub use crate::decode::{decode, DetectedEncoding};
    pub use crate::metadata::{ParameterSet, SweepSettings};
    pub use crate::pipeline::{
        process, process_batch, AnalysisConfig, BatchOutcome, BatchSummary, FileAnalysis,
        FileSummary, Provenance,
    };
    pub use crate::reader::{
        find_header_row, read_table, ParseError, CURRENT_MARKER, POTENTIAL_MARKER,
    };
    pub use crate::series::{Sample, SampleSeries};
}
