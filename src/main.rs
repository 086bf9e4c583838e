use anyhow::Context;
use ged_reader::{
    Event, Family, FamilyGraph, GedcomReaderConfig, Individual, ancestors_by_generation,
    descendants, descendants_by_generation, parse_file,
};
use itertools::Itertools;
use log::info;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let graph = match std::env::args_os().nth(1) {
        Some(arg) => {
            let path = PathBuf::from(arg);
            parse_file(&path, &GedcomReaderConfig::default())
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => {
            info!("No input file given, querying a built-in sample graph");
            sample_graph()
        }
    };

    if let Some(header) = graph.header() {
        println!("{header}\n");
    }
    info!(
        "Graph holds {} individuals across {} families",
        graph.individual_count(),
        graph.family_count()
    );

    let Some(root) = graph.individual_ids().next() else {
        info!("Graph holds no individuals, nothing to query");
        return Ok(());
    };
    println!("Root: {}\n", graph.individual(root));

    let flat = descendants(&graph, root);
    println!("Descendants, discovery order: {}", flat.iter().join(", "));

    let down = descendants_by_generation(&graph, root, 0);
    for (n, bucket) in down.iter().enumerate() {
        println!("Descendant generation {}: {}", n + 1, bucket.iter().join(", "));
    }
    println!(
        "Descendants as JSON:\n{}\n",
        serde_json::to_string_pretty(&down)?
    );

    let up = ancestors_by_generation(&graph, root, 0);
    for (n, bucket) in up.iter().enumerate() {
        println!("Ancestor generation {}: {}", n + 1, bucket.iter().join(", "));
    }
    println!(
        "Ancestors as JSON:\n{}",
        serde_json::to_string_pretty(&up)?
    );

    Ok(())
}

/// A three-generation sample: Eve and Frank are Alice's parents; Alice and
/// Bob have two children, one with a recorded birth date
fn sample_graph() -> FamilyGraph {
    let mut graph = FamilyGraph::new();

    let alice = graph.add_individual(Individual::new("Alice", "Smith"));
    let bob = graph.add_individual(Individual::new("Bob", "Smith"));
    let mut carol = Individual::new("Carol", "Smith");
    carol.events.push(Event::new("BIRT").with_date("1990"));
    let carol = graph.add_individual(carol);
    let dan = graph.add_individual(Individual::new("Dan", "Smith"));
    let eve = graph.add_individual(Individual::new("Eve", "Jones"));
    let frank = graph.add_individual(Individual::new("Frank", "Jones"));

    let marriage = graph.add_family(Family::new());
    graph.set_spouses(marriage, Some(alice), Some(bob));
    graph.add_child(marriage, carol);
    graph.add_child(marriage, dan);

    let parents = graph.add_family(Family::new());
    graph.set_spouses(parents, Some(eve), Some(frank));
    graph.add_child(parents, alice);

    graph
}
