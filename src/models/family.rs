//! Family unit representation and the family graph
//!
//! This module contains the Family model, which represents one `FAM` record,
//! and the `FamilyGraph` arena that owns every parsed entity. Families refer
//! to individuals by id and individuals refer back to families by id, so the
//! graph can be walked in both directions without shared ownership.

use crate::models::event::Event;
use crate::models::header::Header;
use crate::models::individual::Individual;
use crate::models::types::{FamId, Field, IndiId, RecordRef};
use rustc_hash::FxHashMap;

/// A family unit linking spouses to their children
///
/// Either spouse may be absent; a family with neither spouse is degenerate
/// but legal and is handled by every traversal.
#[derive(Debug, Clone, Default)]
pub struct Family {
    /// Wife in the family, if recorded
    pub wife: Option<IndiId>,
    /// Husband in the family, if recorded
    pub husband: Option<IndiId>,
    /// Children in the family, in document order
    pub children: Vec<IndiId>,
    /// Family events (MARR, DIV, ...) in document order
    pub events: Vec<Event>,
    /// Unrecognised record tags, in document order
    pub other_fields: Vec<Field>,
}

impl Family {
    /// Create a new family with no members
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `person` is recorded as the wife or husband of this family
    #[must_use]
    pub fn has_spouse(&self, person: IndiId) -> bool {
        self.wife == Some(person) || self.husband == Some(person)
    }

    /// Number of children in the family
    #[must_use]
    pub fn family_size(&self) -> usize {
        self.children.len()
    }
}

/// The family graph: an arena of individuals and families plus the
/// cross-reference index built during parsing
///
/// Entities are addressed by [`IndiId`]/[`FamId`] indices handed out by
/// `add_individual`/`add_family`. All cross-links are stored as these indices,
/// so dropping the graph releases everything at once and dangling references
/// cannot be constructed through this API.
#[derive(Debug, Default)]
pub struct FamilyGraph {
    /// Parsed header record, if the source had one
    header: Option<Header>,
    /// Individual arena; `IndiId(i)` indexes this vector
    individuals: Vec<Individual>,
    /// Family arena; `FamId(i)` indexes this vector
    families: Vec<Family>,
    /// Cross-reference index mapping `@X1@`-style keys to arena entries
    xrefs: FxHashMap<String, RecordRef>,
}

impl FamilyGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an individual to the graph and return its id
    pub fn add_individual(&mut self, individual: Individual) -> IndiId {
        let id = IndiId(self.individuals.len());
        self.individuals.push(individual);
        id
    }

    /// Add a family to the graph and return its id
    pub fn add_family(&mut self, family: Family) -> FamId {
        let id = FamId(self.families.len());
        self.families.push(family);
        id
    }

    /// Register a cross-reference key for a record
    ///
    /// Keys are unique per graph; re-registering a key overwrites the
    /// previous entry and returns it.
    pub fn register_xref(
        &mut self,
        xref: impl Into<String>,
        record: RecordRef,
    ) -> Option<RecordRef> {
        self.xrefs.insert(xref.into(), record)
    }

    /// Look up a cross-reference key
    #[must_use]
    pub fn resolve_xref(&self, xref: &str) -> Option<RecordRef> {
        self.xrefs.get(xref).copied()
    }

    /// Get an individual by id
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    #[must_use]
    pub fn individual(&self, id: IndiId) -> &Individual {
        &self.individuals[id.0]
    }

    /// Get an individual by id, or `None` for a foreign id
    #[must_use]
    pub fn get_individual(&self, id: IndiId) -> Option<&Individual> {
        self.individuals.get(id.0)
    }

    /// Get a family by id
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    #[must_use]
    pub fn family(&self, id: FamId) -> &Family {
        &self.families[id.0]
    }

    /// Get a family by id, or `None` for a foreign id
    #[must_use]
    pub fn get_family(&self, id: FamId) -> Option<&Family> {
        self.families.get(id.0)
    }

    pub(crate) fn individual_mut(&mut self, id: IndiId) -> &mut Individual {
        &mut self.individuals[id.0]
    }

    pub(crate) fn family_mut(&mut self, id: FamId) -> &mut Family {
        &mut self.families[id.0]
    }

    /// Record `person` as a member of `family` unless already recorded
    ///
    /// # Panics
    /// Panics if `person` did not come from this graph.
    pub fn add_membership(&mut self, person: IndiId, family: FamId) {
        let memberships = &mut self.individuals[person.0].families;
        if !memberships.contains(&family) {
            memberships.push(family);
        }
    }

    /// Set the spouses of a family, back-filling the membership lists
    ///
    /// Passing `None` leaves the corresponding side unset; it does not clear
    /// a previously set spouse.
    ///
    /// # Panics
    /// Panics if `family` or a supplied spouse id did not come from this graph.
    pub fn set_spouses(&mut self, family: FamId, wife: Option<IndiId>, husband: Option<IndiId>) {
        if let Some(wife) = wife {
            self.families[family.0].wife = Some(wife);
            self.add_membership(wife, family);
        }
        if let Some(husband) = husband {
            self.families[family.0].husband = Some(husband);
            self.add_membership(husband, family);
        }
    }

    /// Append a child to a family, back-filling the child's membership list
    ///
    /// # Panics
    /// Panics if `family` or `child` did not come from this graph.
    pub fn add_child(&mut self, family: FamId, child: IndiId) {
        let children = &mut self.families[family.0].children;
        if !children.contains(&child) {
            children.push(child);
        }
        self.add_membership(child, family);
    }

    /// Find the first individual with the given display name, in id order
    #[must_use]
    pub fn find_by_name(&self, given_name: &str, surname: &str) -> Option<IndiId> {
        self.individuals
            .iter()
            .position(|i| i.given_name == given_name && i.surname == surname)
            .map(IndiId)
    }

    /// The parsed header record, if any
    #[must_use]
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Set the header record
    pub fn set_header(&mut self, header: Header) {
        self.header = Some(header);
    }

    /// All individuals, indexable by `IndiId`
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// All families, indexable by `FamId`
    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Iterate over all individual ids in insertion order
    pub fn individual_ids(&self) -> impl Iterator<Item = IndiId> + '_ {
        (0..self.individuals.len()).map(IndiId)
    }

    /// Count the individuals in the graph
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Count the families in the graph
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}
