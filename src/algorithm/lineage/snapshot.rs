//! Detached individual snapshots
//!
//! Traversal results are value types that share no ownership with the graph
//! they came from. A snapshot carries just enough to identify a person in
//! query output: the name and the first recorded birth date.

use crate::models::Individual;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// An owned copy of an individual's identifying data
///
/// Snapshots outlive the graph and can be collected, sorted and serialized
/// freely. Two snapshots describe the same person when their names match and
/// their birth dates are equal or both unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualSnapshot {
    /// Given name; may be empty
    pub given_name: String,
    /// Surname; may be empty
    pub surname: String,
    /// First recorded birth date, `None` when unknown
    pub birth_date: Option<String>,
}

impl IndividualSnapshot {
    /// Snapshot an individual out of the graph
    #[must_use]
    pub fn of(individual: &Individual) -> Self {
        Self {
            given_name: individual.given_name.clone(),
            surname: individual.surname.clone(),
            birth_date: individual.birth_date().map(ToString::to_string),
        }
    }

    /// Whether both name parts match exactly
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.given_name == other.given_name && self.surname == other.surname
    }

    /// Deduplication identity: same name and same birth date, where two
    /// unknown dates count as the same and a known date never matches an
    /// unknown one
    #[must_use]
    pub fn same_person(&self, other: &Self) -> bool {
        self.same_name(other) && self.birth_date == other.birth_date
    }

    /// Order by surname, then given name, both ascending
    ///
    /// An empty surname sorts after every non-empty surname regardless of
    /// which operand carries it; two empty surnames fall back to the given
    /// name.
    #[must_use]
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        match (self.surname.is_empty(), other.surname.is_empty()) {
            (true, true) => self.given_name.cmp(&other.given_name),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .surname
                .cmp(&other.surname)
                .then_with(|| self.given_name.cmp(&other.given_name)),
        }
    }
}

impl fmt::Display for IndividualSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.given_name.is_empty(), self.surname.is_empty()) {
            (false, false) => write!(f, "{} {}", self.given_name, self.surname)?,
            (false, true) => write!(f, "{}", self.given_name)?,
            (true, false) => write!(f, "{}", self.surname)?,
            (true, true) => write!(f, "(unnamed)")?,
        }
        if let Some(date) = &self.birth_date {
            write!(f, " (b. {date})")?;
        }
        Ok(())
    }
}
