//! A Rust library for reading GEDCOM genealogy files into a family graph
//! with generational ancestor and descendant queries.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod reader;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::GedcomReaderConfig;
pub use error::{GedcomError, Result};
pub use models::{
    Encoding, Event, FamId, Family, FamilyGraph, Header, IndiId, Individual, Submitter,
};

// Parsing entry points
pub use parser::{parse_file, parse_str};

// Lineage queries
pub use algorithm::lineage::{
    Generations, IndividualSnapshot, ancestors_by_generation, descendants,
    descendants_by_generation,
};
