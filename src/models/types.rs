//! Common domain type definitions
//!
//! This module contains the identifier newtypes and small value types used
//! across the graph model to ensure consistency and facilitate code reuse.

use serde::Serialize;
use std::fmt;

/// Stable index of an individual in a [`FamilyGraph`](crate::models::FamilyGraph)
///
/// Ids are handed out by the graph when the entity is added and stay valid for
/// the lifetime of that graph. Cross-references between entities are stored as
/// ids, never as pointers, so an id from one graph must not be used with
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndiId(pub usize);

/// Stable index of a family in a [`FamilyGraph`](crate::models::FamilyGraph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FamId(pub usize);

impl fmt::Display for IndiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}

impl fmt::Display for FamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// A resolved cross-reference target in the graph's xref index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    /// An `INDI` record
    Individual(IndiId),
    /// A `FAM` record
    Family(FamId),
}

/// Character encoding declared by the GEDCOM header `CHAR` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// ANSEL encoding
    Ansel,
    /// UTF-8 encoding
    Utf8,
    /// UTF-16 (called UNICODE by the standard)
    Unicode,
    /// Plain ASCII
    Ascii,
}

impl Encoding {
    /// Parse a `CHAR` tag value; returns `None` for unsupported encodings
    #[must_use]
    pub fn from_tag(value: &str) -> Option<Self> {
        match value.trim() {
            "ANSEL" => Some(Self::Ansel),
            "UTF-8" | "UTF8" => Some(Self::Utf8),
            "UNICODE" => Some(Self::Unicode),
            "ASCII" => Some(Self::Ascii),
            _ => None,
        }
    }

    /// The encoding name as it appears in a GEDCOM header
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ansel => "ANSEL",
            Self::Utf8 => "UTF-8",
            Self::Unicode => "UNICODE",
            Self::Ascii => "ASCII",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognised tag/value pair preserved from the source file
///
/// Records keep the tags the parser does not model in an ordered list so no
/// source information is silently discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The GEDCOM tag, e.g. `SEX` or `NOTE`
    pub tag: String,
    /// The tag's value; may be empty
    pub value: String,
}

impl Field {
    /// Create a new field from a tag and value
    #[must_use]
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag, self.value)
    }
}
