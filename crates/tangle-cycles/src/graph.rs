//! Petgraph construction from adjacency-list graphs.
//!
//! Node names are interned into a `DiGraph` once per analysis call; the
//! adjacency-list input is never mutated.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::types::Graph;

/// A petgraph view of an adjacency-list [`Graph`].
///
/// Explicit nodes (edge sources) are interned first, in adjacency-list
/// order, so that node indices follow the caller's ordering. Targets that
/// never appear as a source are added afterwards as implicit leaf nodes.
pub(crate) struct DependencyGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub(crate) fn build(adjacency: &Graph) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<String, NodeIndex> = HashMap::new();

        for (source, _) in adjacency {
            intern(&mut graph, &mut nodes, source);
        }
        for (source, targets) in adjacency {
            let from = nodes[source.as_str()];
            for target in targets {
                let to = intern(&mut graph, &mut nodes, target);
                // update_edge: a repeated target must not become a parallel
                // edge, or cycle enumeration would double-count
                graph.update_edge(from, to, ());
            }
        }

        Self { graph, nodes }
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    /// The name of the node at `index`.
    pub(crate) fn name(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }

    /// All node indices, in interning order.
    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Successors of `index`, sorted ascending for deterministic traversal.
    pub(crate) fn successors(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut successors: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .collect();
        successors.sort_unstable();
        successors
    }

    /// Predecessors of `index`, sorted ascending for deterministic traversal.
    pub(crate) fn predecessors(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut predecessors: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(index, Direction::Incoming)
            .collect();
        predecessors.sort_unstable();
        predecessors
    }

    pub(crate) fn has_self_loop(&self, index: NodeIndex) -> bool {
        self.graph.find_edge(index, index).is_some()
    }
}

fn intern(
    graph: &mut DiGraph<String, ()>,
    nodes: &mut HashMap<String, NodeIndex>,
    name: &str,
) -> NodeIndex {
    if let Some(&index) = nodes.get(name) {
        return index;
    }
    let index = graph.add_node(name.to_owned());
    nodes.insert(name.to_owned(), index);
    index
}
