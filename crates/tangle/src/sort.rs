//! Result canonicalization.
//!
//! Reorders every list-shaped field of a report deterministically so that
//! semantically equal results compare as structurally equal regardless of
//! how the input document happened to be ordered. Engine-owned fields are
//! delegated to the engine's own sorting operation; only the graph is
//! sorted here. Canonicalization never adds, removes, or renames an
//! element.

use tangle_cycles::{FastAnalysis, FullAnalysis, Graph};

use crate::analyze::{CycleEngine, DefaultEngine, TypeAnalysis, TypeAnalysisFast};

/// Returns a copy of `graph` with edges sorted ascending by source name and
/// each target list independently sorted.
///
/// Does not deduplicate; the graph builder already guarantees target
/// uniqueness. Idempotent.
#[must_use]
pub fn sort_graph(graph: &Graph) -> Graph {
    let mut sorted: Graph = graph
        .iter()
        .map(|(source, targets)| {
            let mut targets = targets.clone();
            targets.sort();
            (source.clone(), targets)
        })
        .collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
    sorted
}

/// Canonicalizes a full report with the default engine.
#[must_use]
pub fn sort_type_analysis(report: TypeAnalysis) -> TypeAnalysis {
    sort_type_analysis_with(&DefaultEngine, report)
}

/// Canonicalizes a full report, delegating engine-owned fields to the
/// injected engine's sorting operation.
pub fn sort_type_analysis_with<E: CycleEngine + ?Sized>(
    engine: &E,
    report: TypeAnalysis,
) -> TypeAnalysis {
    let TypeAnalysis {
        entrypoints,
        cycles,
        all,
        dependencies,
        dependents,
        graph,
    } = report;

    let FullAnalysis {
        entrypoints,
        cycles,
        all,
        dependencies,
        dependents,
    } = engine.sort_full(FullAnalysis {
        entrypoints,
        cycles,
        all,
        dependencies,
        dependents,
    });

    TypeAnalysis {
        entrypoints,
        cycles,
        all,
        dependencies,
        dependents,
        graph: sort_graph(&graph),
    }
}

/// Canonicalizes a fast report with the default engine.
#[must_use]
pub fn sort_type_analysis_fast(report: TypeAnalysisFast) -> TypeAnalysisFast {
    sort_type_analysis_fast_with(&DefaultEngine, report)
}

/// Canonicalizes a fast report, delegating engine-owned fields to the
/// injected engine's sorting operation.
pub fn sort_type_analysis_fast_with<E: CycleEngine + ?Sized>(
    engine: &E,
    report: TypeAnalysisFast,
) -> TypeAnalysisFast {
    let TypeAnalysisFast {
        cyclic,
        dependencies,
        dependents,
        graph,
    } = report;

    let FastAnalysis {
        cyclic,
        dependencies,
        dependents,
    } = engine.sort_fast(FastAnalysis {
        cyclic,
        dependencies,
        dependents,
    });

    TypeAnalysisFast {
        cyclic,
        dependencies,
        dependents,
        graph: sort_graph(&graph),
    }
}
