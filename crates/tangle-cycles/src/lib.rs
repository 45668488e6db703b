//! Cycle analysis for directed dependency graphs.
//!
//! Given a graph expressed as an adjacency list of named nodes, this crate
//! reports which nodes are cyclic, which non-cyclic nodes lead into a cycle
//! (*entrypoints*), and which nodes sit upstream or downstream of the cyclic
//! cluster without being part of it.
//!
//! Two modes are provided:
//! - [`analyze`]: precise — enumerates distinct cycles and multi-hop
//!   entrypoint chains.
//! - [`analyze_fast`]: approximate — collapses cycles and entrypoints into a
//!   flat membership set, skipping the enumeration passes. Cheaper on large
//!   graphs.
//!
//! Raw results come back in a deterministic but traversal-dependent order;
//! [`sort_full_analysis`] and [`sort_fast_analysis`] reorder them into a
//! canonical form so semantically equal results compare as structurally
//! equal.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
mod graph;
pub mod sort;
pub mod types;

pub use analysis::{analyze, analyze_fast};
pub use sort::{sort_fast_analysis, sort_full_analysis};
pub use types::{Edge, FastAnalysis, FullAnalysis, Graph};
