//! Configuration for the GEDCOM reader.

/// Configuration for the `GedcomReader`
#[derive(Debug, Clone)]
pub struct GedcomReaderConfig {
    /// Maximum accepted physical line length, in bytes
    ///
    /// The GEDCOM 5.5 grammar caps physical lines at 255 characters; longer
    /// lines are rejected as invalid records.
    pub max_line_length: usize,
    /// Whether to require the `0 HEAD` / `0 TRLR` document frame
    pub validate_structure: bool,
    /// Whether to silently skip unrecognised top-level record types
    ///
    /// When disabled, an unknown level-0 record fails the parse instead of
    /// being logged and ignored.
    pub skip_unknown_records: bool,
    /// Whether a header without a resolvable submitter record is an error
    pub require_submitter: bool,
}

impl Default for GedcomReaderConfig {
    fn default() -> Self {
        Self {
            max_line_length: 255,
            validate_structure: true,
            skip_unknown_records: true,
            require_submitter: false,
        }
    }
}
