//! Graph and analysis result types.
//!
//! The graph representation is a plain adjacency list of owned strings so
//! that results serialize to the same JSON shape callers feed in: an array
//! of `[source, [target, ...]]` pairs.

use serde::{Deserialize, Serialize};

/// A node name paired with the ordered list of node names it points at.
pub type Edge = (String, Vec<String>);

/// A directed graph as an adjacency list, one [`Edge`] per source node.
///
/// Targets without an [`Edge`] entry of their own are treated as implicit
/// leaf nodes.
pub type Graph = Vec<Edge>;

/// Report produced by the precise mode, [`analyze`](crate::analyze).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullAnalysis {
    /// Chains of non-cyclic nodes leading into a cycle, one chain per
    /// reachable starting node, ordered from that node to the cycle
    /// boundary (exclusive).
    pub entrypoints: Vec<Vec<String>>,
    /// Every elementary cycle, listed once as an open node sequence. A
    /// self-loop is a one-element cycle.
    pub cycles: Vec<Vec<String>>,
    /// All nodes that are cyclic or lead into a cycle.
    pub all: Vec<String>,
    /// Non-cyclic nodes the cyclic nodes depend on, directly or
    /// transitively.
    pub dependencies: Vec<String>,
    /// Nodes that depend on the cyclic cluster's dependencies without
    /// themselves leading into a cycle.
    pub dependents: Vec<String>,
}

/// Report produced by the approximate mode, [`analyze_fast`](crate::analyze_fast).
///
/// Trades structure for speed: nodes leading into a cycle are folded into
/// [`cyclic`](Self::cyclic) rather than reported as distinct chains, and
/// individual cycles are not enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastAnalysis {
    /// Nodes on a cycle, plus nodes that can reach one.
    pub cyclic: Vec<String>,
    /// Nodes the cyclic set depends on, directly or transitively.
    pub dependencies: Vec<String>,
    /// Nodes that depend on the cyclic set's dependencies without being
    /// able to reach a cycle.
    pub dependents: Vec<String>,
}
