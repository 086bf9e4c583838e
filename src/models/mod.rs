//! Data models for GEDCOM records
//!
//! The model layer is deliberately plain: entities are owned structs with
//! public fields, cross-linked through integer ids handed out by the
//! [`FamilyGraph`] arena rather than through shared pointers.

pub mod event;
pub mod family;
pub mod header;
pub mod individual;
pub mod types;

pub use event::{Event, is_family_event, is_individual_event};
pub use family::{Family, FamilyGraph};
pub use header::{Header, Submitter};
pub use individual::Individual;
pub use types::{Encoding, FamId, Field, IndiId, RecordRef};
