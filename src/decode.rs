//! Byte-to-text decoding with a legacy-encoding fallback.
//!
//! Workstation exports are usually UTF-8, but files produced by
//! Chinese-locale instrument software arrive as GBK. Decoding tries strict
//! UTF-8 first and falls back to GBK with U+FFFD replacement for
//! undecodable sequences, so it never fails and never raises on bad bytes.

use std::borrow::Cow;

use log::debug;
use serde::{Deserialize, Serialize};

/// Which decoding strategy produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedEncoding {
    /// The input was valid UTF-8.
    Utf8,
    /// The input was decoded as GBK, with replacement of undecodable bytes.
    GbkLossy,
}

/// Decode raw file bytes into text.
///
/// A UTF-8 BOM is stripped. Invalid UTF-8 anywhere in the input switches
/// the whole document to the GBK fallback, so mixed-encoding output is
/// never produced.
pub fn decode(bytes: &[u8]) -> (Cow<'_, str>, DetectedEncoding) {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), DetectedEncoding::Utf8),
        Err(_) => {
            let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
            debug!(
                "input is not valid UTF-8, decoded as GBK (replacements: {})",
                had_errors
            );
            (text, DetectedEncoding::GbkLossy)
        }
    }
}
