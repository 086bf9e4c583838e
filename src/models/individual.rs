//! Individual entity model
//!
//! This module contains the core Individual entity structure. An Individual
//! represents one person from an `INDI` record: a name, the life events the
//! file records for them, and the families they belong to as spouse or child.

use crate::models::event::Event;
use crate::models::types::{FamId, Field};
use smallvec::SmallVec;
use std::fmt;

/// Core Individual entity representing a person in the family graph
#[derive(Debug, Clone, Default)]
pub struct Individual {
    /// Given name; may be empty when the source records none
    pub given_name: String,
    /// Surname; may be empty when the source records none
    pub surname: String,
    /// Life events in document order
    pub events: Vec<Event>,
    /// Families this individual belongs to, as spouse or as child, in
    /// document order
    ///
    /// Most individuals belong to at most two families (one as a child, one
    /// as a spouse), hence the inline capacity.
    pub families: SmallVec<[FamId; 2]>,
    /// Unrecognised record tags (SEX, NOTE, ...), in document order
    pub other_fields: Vec<Field>,
}

impl Individual {
    /// Create a new individual with the given names and nothing else
    #[must_use]
    pub fn new(given_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            surname: surname.into(),
            ..Self::default()
        }
    }

    /// The first birth event recorded for this individual, if any
    #[must_use]
    pub fn birth_event(&self) -> Option<&Event> {
        self.events.iter().find(|e| e.is_birth())
    }

    /// The first birth event's date, if one is recorded and non-empty
    #[must_use]
    pub fn birth_date(&self) -> Option<&str> {
        self.birth_event()
            .and_then(|e| e.date.as_deref())
            .filter(|d| !d.is_empty())
    }

    /// Whether this individual carries the same display name as `other`
    ///
    /// Names are not unique across a file; identity checks must use graph
    /// ids instead.
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.given_name == other.given_name && self.surname == other.surname
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.given_name.is_empty(), self.surname.is_empty()) {
            (false, false) => write!(f, "{} {}", self.given_name, self.surname),
            (false, true) => f.write_str(&self.given_name),
            (true, false) => f.write_str(&self.surname),
            (true, true) => f.write_str("(unnamed)"),
        }
    }
}
