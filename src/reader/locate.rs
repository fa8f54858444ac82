/// Column-name marker identifying the potential column.
pub const POTENTIAL_MARKER: &str = "Potential";

/// Column-name marker identifying the current column.
pub const CURRENT_MARKER: &str = "Current";

/// Find the tabular header row: the first line containing both column
/// markers.
///
/// Matching is case-sensitive on the literal vocabulary of the instrument
/// export format. Everything before the returned index is preamble; the
/// row itself and everything after it form the data block. `None` means
/// the file has no recognizable data region and must be rejected.
pub fn find_header_row(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.contains(POTENTIAL_MARKER) && line.contains(CURRENT_MARKER))
}
