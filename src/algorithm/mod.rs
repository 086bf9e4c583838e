//! Algorithm implementations for family graph queries
//!
//! This module contains the traversal algorithms that run over a parsed
//! family graph, currently generational lineage enumeration in both the
//! ancestor and descendant directions.

pub mod lineage;
