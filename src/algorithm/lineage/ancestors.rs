//! Ancestor enumeration
//!
//! Ascent follows parent links out of every family where the current person
//! participates as a child. Unlike the descendant direction there is no
//! result deduplication: a parent reachable along two lines of ascent is
//! recorded once per line. The visited set still bounds the walk, so the
//! repeated entries never cause repeated expansion.

use crate::algorithm::lineage::generations::Generations;
use crate::algorithm::lineage::snapshot::IndividualSnapshot;
use crate::models::{FamilyGraph, IndiId};
use rustc_hash::FxHashSet;

/// Ancestors of `root` grouped into 1-based generations
///
/// Generation 1 holds the root's parents. For each family where the person
/// is neither the recorded wife nor the recorded husband, both present
/// parents are recorded into the current generation and then expanded one
/// generation further, wife first. `max_generations` bounds the depth; `0`
/// means unbounded. Buckets are sorted by name.
///
/// # Panics
/// Panics if `root` did not come from `graph`.
#[must_use]
pub fn ancestors_by_generation(
    graph: &FamilyGraph,
    root: IndiId,
    max_generations: usize,
) -> Generations {
    let mut generations = Generations::new();
    let mut visited: FxHashSet<IndiId> = FxHashSet::default();
    visited.insert(root);
    collect_ancestors(graph, root, root, 1, max_generations, &mut generations, &mut visited);
    log::debug!(
        "collected {} ancestors of {} across {} generations",
        generations.total(),
        graph.individual(root),
        generations.len()
    );
    generations
}

fn collect_ancestors(
    graph: &FamilyGraph,
    person: IndiId,
    root: IndiId,
    generation: usize,
    max: usize,
    out: &mut Generations,
    visited: &mut FxHashSet<IndiId>,
) {
    if max != 0 && generation > max {
        return;
    }
    let current = graph.individual(person);
    for &family_id in &current.families {
        let family = graph.family(family_id);
        if family.has_spouse(person) {
            continue;
        }
        for parent_id in [family.wife, family.husband].into_iter().flatten() {
            if parent_id == root {
                continue;
            }
            out.insert_sorted(generation, IndividualSnapshot::of(graph.individual(parent_id)));
        }
        for parent_id in [family.wife, family.husband].into_iter().flatten() {
            if visited.insert(parent_id) {
                collect_ancestors(graph, parent_id, root, generation + 1, max, out, visited);
            }
        }
    }
}
