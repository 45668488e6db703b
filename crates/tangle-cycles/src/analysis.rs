//! Precise and approximate cycle analysis.
//!
//! Both modes start from Tarjan's SCC algorithm to find the nodes that sit
//! on a cycle. The precise mode then enumerates every elementary cycle and
//! every entrypoint chain; the approximate mode replaces both enumerations
//! with plain reachability, which is why it stays linear in the size of the
//! graph while the precise mode can grow with the number of distinct cycles
//! and paths.

use std::collections::{HashSet, VecDeque};

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;

use crate::graph::DependencyGraph;
use crate::types::{FastAnalysis, FullAnalysis, Graph};

/// Analyze `graph` precisely.
///
/// Reports every elementary cycle, every chain of non-cyclic nodes leading
/// into a cycle, and the membership sets derived from them. List order is
/// deterministic but traversal-dependent; pass the result through
/// [`sort_full_analysis`](crate::sort_full_analysis) before comparing.
#[must_use]
pub fn analyze(graph: &Graph) -> FullAnalysis {
    let dg = DependencyGraph::build(graph);
    let on_cycle = cyclic_nodes(&dg);

    let cycle_paths = elementary_cycles(&dg, &on_cycle);
    let chain_paths = entry_chains(&dg, &on_cycle);

    let entry_nodes: HashSet<NodeIndex> = chain_paths.iter().flatten().copied().collect();
    let cluster: HashSet<NodeIndex> = on_cycle.union(&entry_nodes).copied().collect();

    let downstream = reachable(&on_cycle, |node| dg.successors(node));
    let dependencies: HashSet<NodeIndex> = downstream.difference(&cluster).copied().collect();

    let upstream = reachable(&dependencies, |node| dg.predecessors(node));
    let dependents: HashSet<NodeIndex> = upstream
        .into_iter()
        .filter(|node| !cluster.contains(node) && !dependencies.contains(node))
        .collect();

    tracing::debug!(
        nodes = dg.inner().node_count(),
        cyclic = on_cycle.len(),
        cycles = cycle_paths.len(),
        "analyzed graph"
    );

    FullAnalysis {
        entrypoints: to_names(&dg, &chain_paths),
        cycles: to_names(&dg, &cycle_paths),
        all: names_in_order(&dg, &cluster),
        dependencies: names_in_order(&dg, &dependencies),
        dependents: names_in_order(&dg, &dependents),
    }
}

/// Analyze `graph` approximately.
///
/// Skips both enumeration passes: any node that can reach a cycle is folded
/// into the flat `cyclic` set, and no individual cycles or chains are
/// reported.
#[must_use]
pub fn analyze_fast(graph: &Graph) -> FastAnalysis {
    let dg = DependencyGraph::build(graph);
    let on_cycle = cyclic_nodes(&dg);

    let cyclic = reachable(&on_cycle, |node| dg.predecessors(node));

    let downstream = reachable(&cyclic, |node| dg.successors(node));
    let dependencies: HashSet<NodeIndex> = downstream.difference(&cyclic).copied().collect();

    let upstream = reachable(&dependencies, |node| dg.predecessors(node));
    let dependents: HashSet<NodeIndex> = upstream
        .into_iter()
        .filter(|node| !cyclic.contains(node) && !dependencies.contains(node))
        .collect();

    tracing::debug!(
        nodes = dg.inner().node_count(),
        cyclic = cyclic.len(),
        "analyzed graph (fast)"
    );

    FastAnalysis {
        cyclic: names_in_order(&dg, &cyclic),
        dependencies: names_in_order(&dg, &dependencies),
        dependents: names_in_order(&dg, &dependents),
    }
}

/// Nodes that sit on at least one cycle: members of a non-trivial strongly
/// connected component, or nodes with a self-loop.
fn cyclic_nodes(dg: &DependencyGraph) -> HashSet<NodeIndex> {
    let mut cyclic = HashSet::new();
    for component in tarjan_scc(dg.inner()) {
        if component.len() > 1 {
            cyclic.extend(component);
        } else if dg.has_self_loop(component[0]) {
            cyclic.insert(component[0]);
        }
    }
    cyclic
}

/// Enumerates every elementary cycle, each exactly once.
///
/// Path-stack DFS restricted to cyclic nodes, started from each cyclic node
/// in index order. A search rooted at `start` only visits nodes with an
/// index above `start`, so every cycle is reported from its lowest-index
/// node and never again.
fn elementary_cycles(dg: &DependencyGraph, cyclic: &HashSet<NodeIndex>) -> Vec<Vec<NodeIndex>> {
    let mut cycles = Vec::new();

    for start in dg.node_indices().filter(|index| cyclic.contains(index)) {
        let mut path: Vec<NodeIndex> = vec![start];
        let mut on_path: HashSet<NodeIndex> = HashSet::from([start]);
        let mut frames: Vec<(Vec<NodeIndex>, usize)> = vec![(dg.successors(start), 0)];

        while let Some((children, cursor)) = frames.last_mut() {
            if *cursor >= children.len() {
                frames.pop();
                if let Some(done) = path.pop() {
                    on_path.remove(&done);
                }
                continue;
            }

            let child = children[*cursor];
            *cursor += 1;

            if child == start {
                cycles.push(path.clone());
                continue;
            }
            if child < start || !cyclic.contains(&child) || on_path.contains(&child) {
                continue;
            }

            path.push(child);
            on_path.insert(child);
            frames.push((dg.successors(child), 0));
        }
    }

    cycles
}

/// Enumerates every chain of non-cyclic nodes leading into a cycle.
///
/// One chain per simple path that starts at a non-cyclic node and ends at a
/// node with an edge into the cyclic set. A node adjacent to a cycle yields
/// the one-element chain of itself.
fn entry_chains(dg: &DependencyGraph, cyclic: &HashSet<NodeIndex>) -> Vec<Vec<NodeIndex>> {
    let mut chains = Vec::new();

    for start in dg.node_indices().filter(|index| !cyclic.contains(index)) {
        let mut path = Vec::new();
        let mut on_path = HashSet::new();
        chain_dfs(dg, cyclic, start, &mut path, &mut on_path, &mut chains);
    }

    chains
}

fn chain_dfs(
    dg: &DependencyGraph,
    cyclic: &HashSet<NodeIndex>,
    node: NodeIndex,
    path: &mut Vec<NodeIndex>,
    on_path: &mut HashSet<NodeIndex>,
    chains: &mut Vec<Vec<NodeIndex>>,
) {
    path.push(node);
    on_path.insert(node);

    let successors = dg.successors(node);
    if successors.iter().any(|next| cyclic.contains(next)) {
        chains.push(path.clone());
    }
    for next in successors {
        if !cyclic.contains(&next) && !on_path.contains(&next) {
            chain_dfs(dg, cyclic, next, path, on_path, chains);
        }
    }

    path.pop();
    on_path.remove(&node);
}

/// Every node reachable from `seeds` (seeds included) by repeatedly
/// applying `step`.
fn reachable<F>(seeds: &HashSet<NodeIndex>, mut step: F) -> HashSet<NodeIndex>
where
    F: FnMut(NodeIndex) -> Vec<NodeIndex>,
{
    let mut seen: HashSet<NodeIndex> = seeds.clone();
    let mut queue: VecDeque<NodeIndex> = seeds.iter().copied().collect();

    while let Some(node) = queue.pop_front() {
        for next in step(node) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}

fn to_names(dg: &DependencyGraph, paths: &[Vec<NodeIndex>]) -> Vec<Vec<String>> {
    paths
        .iter()
        .map(|path| path.iter().map(|&index| dg.name(index).to_owned()).collect())
        .collect()
}

/// Membership set rendered as names, in node interning order so raw output
/// is deterministic for a given input.
fn names_in_order(dg: &DependencyGraph, members: &HashSet<NodeIndex>) -> Vec<String> {
    dg.node_indices()
        .filter(|index| members.contains(index))
        .map(|index| dg.name(index).to_owned())
        .collect()
}
