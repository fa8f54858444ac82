//! Locating and reading the tabular data region.
//!
//! Measurement exports are "CSV" in name only: an unbounded preamble of
//! instrument parameters precedes the real table. This module finds the
//! header row by its column vocabulary rather than by position, reads
//! everything after it as delimited data, and keeps only rows whose
//! potential/current pair is finite.
//!
//! The locator failing is the single most important failure point of the
//! whole pipeline: a file without a recognizable data region yields
//! [`ParseError::HeaderNotFound`], never a guessed or partial parse.

mod error;
mod locate;
mod table;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use locate::{find_header_row, CURRENT_MARKER, POTENTIAL_MARKER};
pub use table::read_table;
