//! Descendant enumeration
//!
//! Descent follows child links out of every family where the current person
//! is a recorded spouse. Duplicate discoveries of the same person through
//! different descent paths are collapsed by name and birth date; a visited
//! set keyed by entity id keeps malformed cyclic graphs from recursing
//! forever.

use crate::algorithm::lineage::generations::Generations;
use crate::algorithm::lineage::snapshot::IndividualSnapshot;
use crate::models::{FamId, FamilyGraph, IndiId};
use rustc_hash::FxHashSet;

/// All descendants of `root`, in discovery order
///
/// Children are visited family by family, depth-first: each child is
/// recorded before its own descendants. A child whose name matches the
/// person currently being expanded is skipped. A person already present in
/// the result under the same name and birth date is not recorded again.
///
/// # Panics
/// Panics if `root` did not come from `graph`.
#[must_use]
pub fn descendants(graph: &FamilyGraph, root: IndiId) -> Vec<IndividualSnapshot> {
    let mut result = Vec::new();
    let mut visited: FxHashSet<IndiId> = FxHashSet::default();
    visited.insert(root);
    collect_flat(graph, root, root, &mut result, &mut visited);
    log::debug!(
        "collected {} descendants of {}",
        result.len(),
        graph.individual(root)
    );
    result
}

/// Descendants of `root` grouped into 1-based generations
///
/// Generation 1 holds the root's children. `max_generations` bounds the
/// depth; `0` means unbounded. Each bucket is sorted by name, and a person
/// already recorded in any generation up to and including the current one is
/// not recorded again.
///
/// # Panics
/// Panics if `root` did not come from `graph`.
#[must_use]
pub fn descendants_by_generation(
    graph: &FamilyGraph,
    root: IndiId,
    max_generations: usize,
) -> Generations {
    let mut generations = Generations::new();
    let mut visited: FxHashSet<IndiId> = FxHashSet::default();
    visited.insert(root);
    collect_generation(graph, root, root, 1, max_generations, &mut generations, &mut visited);
    log::debug!(
        "collected {} descendants of {} across {} generations",
        generations.total(),
        graph.individual(root),
        generations.len()
    );
    generations
}

fn collect_flat(
    graph: &FamilyGraph,
    person: IndiId,
    root: IndiId,
    result: &mut Vec<IndividualSnapshot>,
    visited: &mut FxHashSet<IndiId>,
) {
    let current = graph.individual(person);
    for &family_id in &current.families {
        let family = graph.family(family_id);
        if !family.has_spouse(person) {
            continue;
        }
        for &child_id in &family.children {
            if child_id == root {
                continue;
            }
            let child = graph.individual(child_id);
            if child.same_name(current) {
                continue;
            }
            let snapshot = IndividualSnapshot::of(child);
            if !result.iter().any(|existing| existing.same_person(&snapshot)) {
                result.push(snapshot);
            }
            if is_leaf_child(graph, child_id, family_id) {
                continue;
            }
            if visited.insert(child_id) {
                collect_flat(graph, child_id, root, result, visited);
            }
        }
    }
}

fn collect_generation(
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
        if !family.has_spouse(person) {
            continue;
        }
        for &child_id in &family.children {
            if child_id == root {
                continue;
            }
            let child = graph.individual(child_id);
            if child.same_name(current) {
                continue;
            }
            let snapshot = IndividualSnapshot::of(child);
            if !out.contains_through(generation, &snapshot) {
                out.insert_sorted(generation, snapshot);
            }
            if is_leaf_child(graph, child_id, family_id) {
                continue;
            }
            if visited.insert(child_id) {
                collect_generation(graph, child_id, root, generation + 1, max, out, visited);
            }
        }
    }
}

/// A child whose only family membership is the one just walked, and who is
/// not a spouse there, cannot have children of their own on record. Skipping
/// the recursion is a shortcut, not a correctness requirement.
fn is_leaf_child(graph: &FamilyGraph, child: IndiId, family: FamId) -> bool {
    graph.individual(child).families.len() == 1 && !graph.family(family).has_spouse(child)
}
