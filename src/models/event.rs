//! Life event model
//!
//! This module contains the Event model and the tag tables that decide which
//! GEDCOM tags open an event sub-record on individuals and families.

use crate::models::types::Field;
use std::fmt;

/// GEDCOM tags that open an event on an `INDI` record
pub const INDIVIDUAL_EVENT_TAGS: [&str; 23] = [
    "BIRT", "CHR", "DEAT", "BURI", "CREM", "ADOP", "BAPM", "BARM", "BASM", "BLES", "CHRA", "CONF",
    "FCOM", "ORDN", "NATU", "EMIG", "IMMI", "CENS", "PROB", "WILL", "GRAD", "RETI", "EVEN",
];

/// GEDCOM tags that open an event on a `FAM` record
pub const FAMILY_EVENT_TAGS: [&str; 12] = [
    "ANUL", "CENS", "DIV", "DIVF", "ENGA", "MARB", "MARC", "MARR", "MARL", "MARS", "RESI", "EVEN",
];

/// Whether `tag` opens an individual event sub-record
#[must_use]
pub fn is_individual_event(tag: &str) -> bool {
    INDIVIDUAL_EVENT_TAGS.contains(&tag)
}

/// Whether `tag` opens a family event sub-record
#[must_use]
pub fn is_family_event(tag: &str) -> bool {
    FAMILY_EVENT_TAGS.contains(&tag)
}

/// A life event attached to an individual or family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The event type tag, e.g. `BIRT` or `MARR`
    pub tag: String,
    /// The event date as free text; `None` or empty means unknown
    ///
    /// GEDCOM dates are not required to be calendar dates ("ABT 1850" is
    /// legal), so the value is kept verbatim and compared as a string.
    pub date: Option<String>,
    /// The event place as free text
    pub place: Option<String>,
    /// Unrecognised sub-record tags, in document order
    pub other_fields: Vec<Field>,
}

impl Event {
    /// Create a new event with the given type tag and no details
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            date: None,
            place: None,
            other_fields: Vec::new(),
        }
    }

    /// Set the event date
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the event place
    #[must_use]
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Whether this is a birth event
    #[must_use]
    pub fn is_birth(&self) -> bool {
        self.tag == "BIRT"
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        if let Some(date) = &self.date {
            write!(f, " {date}")?;
        }
        if let Some(place) = &self.place {
            write!(f, " ({place})")?;
        }
        Ok(())
    }
}
