/// Errors that can occur while parsing a measurement file.
///
/// All fatal conditions are file-scoped: one file failing never aborts the
/// other files of a batch, and every message names the specific missing
/// piece so the user can fix the source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No line of the file contains both column markers.
    #[error("no data header row found: no line contains both \"Potential\" and \"Current\"")]
    HeaderNotFound,

    /// The header row was located, but a required column is missing.
    #[error("data header row found, but no column name contains \"{marker}\"")]
    ColumnNotRecognized {
        /// The column marker that failed to match any trimmed column name.
        marker: String,
    },

    /// Too few valid rows survived numeric cleaning.
    #[error("insufficient data: {found} valid rows after cleaning, at least {required} required")]
    InsufficientData {
        /// Rows with a finite potential/current pair.
        found: usize,
        /// Configured minimum.
        required: usize,
    },

    /// I/O error reading the input.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying CSV reader error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}
