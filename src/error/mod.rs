//! Error handling for the GEDCOM reader.

pub mod util;

/// Errors that can occur while reading or parsing a GEDCOM file
#[derive(Debug, thiserror::Error)]
pub enum GedcomError {
    /// Error opening or reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a structurally valid GEDCOM document
    /// (missing HEAD/TRLR, broken level nesting)
    #[error("invalid GEDCOM: {reason} (line {line})")]
    InvalidGedcom { reason: String, line: usize },

    /// The header record is missing or incomplete
    #[error("invalid header: {reason} (line {line})")]
    InvalidHeader { reason: String, line: usize },

    /// A record line or cross-reference could not be processed
    #[error("invalid record: {reason} (line {line})")]
    InvalidRecord { reason: String, line: usize },

    /// Any other error
    #[error("{0}")]
    Other(String),
}

impl GedcomError {
    /// Create an `InvalidGedcom` error for the given source line
    pub fn invalid_gedcom(reason: impl Into<String>, line: usize) -> Self {
        Self::InvalidGedcom {
            reason: reason.into(),
            line,
        }
    }

    /// Create an `InvalidHeader` error for the given source line
    pub fn invalid_header(reason: impl Into<String>, line: usize) -> Self {
        Self::InvalidHeader {
            reason: reason.into(),
            line,
        }
    }

    /// Create an `InvalidRecord` error for the given source line
    pub fn invalid_record(reason: impl Into<String>, line: usize) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
            line,
        }
    }

    /// The 1-based source line the error refers to, if it carries one
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidGedcom { line, .. }
            | Self::InvalidHeader { line, .. }
            | Self::InvalidRecord { line, .. } => Some(*line),
            Self::Io(_) | Self::Other(_) => None,
        }
    }
}

/// Result type for GEDCOM reader operations
pub type Result<T> = std::result::Result<T, GedcomError>;
