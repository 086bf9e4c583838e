#[cfg(test)]
mod tests {
    use crate::utils::{person, person_born, union};
    use ged_reader::{FamId, FamilyGraph, IndiId, Individual, models::RecordRef};

    #[test]
    fn test_arena_hands_out_sequential_ids() {
        let mut graph = FamilyGraph::new();
        let first = person(&mut graph, "Alice", "Smith");
        let second = person(&mut graph, "Bob", "Smith");

        assert_eq!(first, IndiId(0));
        assert_eq!(second, IndiId(1));
        assert_eq!(graph.individual_count(), 2);
        assert_eq!(graph.family_count(), 0);
        assert_eq!(graph.individuals()[1].given_name, "Bob");
        assert!(graph.families().is_empty());
        let ids: Vec<IndiId> = graph.individual_ids().collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_checked_lookups_reject_foreign_ids() {
        let mut graph = FamilyGraph::new();
        let alice = person(&mut graph, "Alice", "Smith");

        assert!(graph.get_individual(alice).is_some());
        assert!(graph.get_individual(IndiId(7)).is_none());
        assert!(graph.get_family(FamId(0)).is_none());
    }

    #[test]
    fn test_xref_index_resolves_typed_references() {
        let mut graph = FamilyGraph::new();
        let alice = person(&mut graph, "Alice", "Smith");
        let family = union(&mut graph, Some(alice), None, &[]);
        graph.register_xref("@I1@", RecordRef::Individual(alice));
        graph.register_xref("@F1@", RecordRef::Family(family));

        assert_eq!(graph.resolve_xref("@I1@"), Some(RecordRef::Individual(alice)));
        assert_eq!(graph.resolve_xref("@F1@"), Some(RecordRef::Family(family)));
        assert_eq!(graph.resolve_xref("@I2@"), None);
    }

    #[test]
    fn test_membership_lists_record_spouse_and_child_roles() {
        let mut graph = FamilyGraph::new();
        let alice = person(&mut graph, "Alice", "Smith");
        let bob = person(&mut graph, "Bob", "Smith");
        let carol = person_born(&mut graph, "Carol", "Smith", "1990");
        let eve = person(&mut graph, "Eve", "Jones");
        let as_child = union(&mut graph, Some(eve), None, &[alice]);
        let as_spouse = union(&mut graph, Some(alice), Some(bob), &[carol]);

        assert_eq!(
            graph.individual(alice).families.as_slice(),
            &[as_child, as_spouse]
        );
        assert!(graph.family(as_spouse).has_spouse(alice));
        assert!(!graph.family(as_child).has_spouse(alice));
        assert_eq!(graph.family(as_spouse).family_size(), 1);
    }

    #[test]
    fn test_find_by_name_scans_in_id_order() {
        let mut graph = FamilyGraph::new();
        let _bob = person(&mut graph, "Bob", "Smith");
        let first_carol = person_born(&mut graph, "Carol", "Smith", "1990");
        let _second_carol = person_born(&mut graph, "Carol", "Smith", "1995");

        assert_eq!(graph.find_by_name("Carol", "Smith"), Some(first_carol));
        assert_eq!(graph.find_by_name("Carol", "Jones"), None);
    }

    #[test]
    fn test_individual_display_handles_partial_names() {
        assert_eq!(Individual::new("Alice", "Smith").to_string(), "Alice Smith");
        assert_eq!(Individual::new("Alice", "").to_string(), "Alice");
        assert_eq!(Individual::new("", "Smith").to_string(), "Smith");
        assert_eq!(Individual::new("", "").to_string(), "(unnamed)");
    }

    #[test]
    fn test_birth_date_comes_from_the_first_birth_event() {
        let mut graph = FamilyGraph::new();
        let carol = person_born(&mut graph, "Carol", "Smith", "1 JAN 1990");
        let dan = person(&mut graph, "Dan", "Smith");

        assert_eq!(graph.individual(carol).birth_date(), Some("1 JAN 1990"));
        assert_eq!(graph.individual(dan).birth_date(), None);
    }
}
