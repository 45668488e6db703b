//! Order canonicalization of analysis results.
//!
//! Raw results are deterministic for a given input but depend on traversal
//! order, so two semantically equal analyses may differ in list ordering.
//! The sorting operations here reorder every list field into a canonical
//! form without adding, removing, or renaming any element.

use crate::types::{FastAnalysis, FullAnalysis};

/// Canonicalize a [`FullAnalysis`].
///
/// Flat name lists are sorted ascending. Each cycle is rotated so its
/// minimum node comes first (a cycle is rotation-invariant, so this
/// preserves its traversal order), then the cycle and entrypoint lists are
/// sorted lexicographically. Idempotent.
#[must_use]
pub fn sort_full_analysis(analysis: FullAnalysis) -> FullAnalysis {
    let FullAnalysis {
        entrypoints,
        cycles,
        all,
        dependencies,
        dependents,
    } = analysis;

    FullAnalysis {
        entrypoints: sorted_nested(entrypoints),
        cycles: sorted_cycles(cycles),
        all: sorted(all),
        dependencies: sorted(dependencies),
        dependents: sorted(dependents),
    }
}

/// Canonicalize a [`FastAnalysis`]: every list sorted ascending. Idempotent.
#[must_use]
pub fn sort_fast_analysis(analysis: FastAnalysis) -> FastAnalysis {
    let FastAnalysis {
        cyclic,
        dependencies,
        dependents,
    } = analysis;

    FastAnalysis {
        cyclic: sorted(cyclic),
        dependencies: sorted(dependencies),
        dependents: sorted(dependents),
    }
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

/// Sorts the outer list only; chains are paths whose internal order is
/// meaningful.
fn sorted_nested(mut paths: Vec<Vec<String>>) -> Vec<Vec<String>> {
    paths.sort();
    paths
}

/// Rotates each cycle to start at its minimum node, then sorts the list.
fn sorted_cycles(cycles: Vec<Vec<String>>) -> Vec<Vec<String>> {
    sorted_nested(cycles.into_iter().map(rotate_to_min).collect())
}

fn rotate_to_min(mut cycle: Vec<String>) -> Vec<String> {
    let lowest = cycle
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(position, _)| position);
    if let Some(position) = lowest {
        cycle.rotate_left(position);
    }
    cycle
}
