//! Lineage traversal
//!
//! Enumerate a person's descendants or ancestors, either as one flat list in
//! discovery order or grouped into 1-based generations. Results are detached
//! [`IndividualSnapshot`] values, so they stay valid however long the caller
//! keeps them.

mod ancestors;
mod descendants;
mod generations;
mod snapshot;

pub use ancestors::ancestors_by_generation;
pub use descendants::{descendants, descendants_by_generation};
pub use generations::Generations;
pub use snapshot::IndividualSnapshot;
