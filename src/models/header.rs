//! Header and submitter records
//!
//! The header carries file-level metadata (producing system, format version,
//! character encoding) and an optional link to the submitter record that
//! describes who produced the file.

use crate::models::types::{Encoding, Field};
use std::fmt;

/// File-level metadata parsed from the `HEAD` record
#[derive(Debug, Clone)]
pub struct Header {
    /// Producing system, from `SOUR`
    pub source: String,
    /// GEDCOM format version, from `GEDC`/`VERS`, kept verbatim
    pub gedc_version: String,
    /// Character encoding, from `CHAR`
    pub encoding: Encoding,
    /// Submitter record resolved from the `SUBM` pointer
    pub submitter: Option<Submitter>,
    /// Unrecognised header tags, in document order
    pub other_fields: Vec<Field>,
}

impl Header {
    /// Create a header with the required metadata and no submitter
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        gedc_version: impl Into<String>,
        encoding: Encoding,
    ) -> Self {
        Self {
            source: source.into(),
            gedc_version: gedc_version.into(),
            encoding,
            submitter: None,
            other_fields: Vec::new(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HEADER:\nSource: {}\nVersion: {}\nEncoding: {}",
            self.source, self.gedc_version, self.encoding
        )?;
        if let Some(submitter) = &self.submitter {
            write!(f, "\n{submitter}")?;
        }
        for field in &self.other_fields {
            write!(f, "\n{field}")?;
        }
        Ok(())
    }
}

/// The person or agency that produced the file, from the `SUBM` record
#[derive(Debug, Clone)]
pub struct Submitter {
    /// Submitter name, from `NAME`
    pub name: String,
    /// Postal address, from `ADDR`, if recorded
    pub address: Option<String>,
    /// Unrecognised record tags, in document order
    pub other_fields: Vec<Field>,
}

impl Submitter {
    /// Create a submitter with a name and no address
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            other_fields: Vec::new(),
        }
    }
}

impl fmt::Display for Submitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SUBMITTER:\nName: {}", self.name)?;
        for field in &self.other_fields {
            write!(f, "\n{field}")?;
        }
        if let Some(address) = &self.address {
            write!(f, "\nAddress: {address}")?;
        }
        Ok(())
    }
}
