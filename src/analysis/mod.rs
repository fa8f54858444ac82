//! Sweep segmentation, cycle assembly, and peak extraction.
//!
//! This is the analytical core of the crate: partition the potential
//! series into monotonic sweep legs (from declared instrument parameters
//! when they are present and plausible, otherwise from direction reversals
//! in the signal itself), pair consecutive legs into full cycles, and
//! report each cycle's current extrema.

mod cycle;
mod peaks;
mod segment;

#[cfg(test)]
mod tests;

pub use cycle::{assemble, Cycle};
pub use peaks::{extract, PeakPoint, PeakResult};
pub use segment::{
    segment, segment_by_declared, segment_by_direction, DeclaredRejection, Segment,
    SegmentationMode, SegmentationOutcome,
};
