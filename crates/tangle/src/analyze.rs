//! Analysis adapter: wiring schema graphs to a cycle-analysis engine.
//!
//! The engine is an external collaborator consumed through the
//! [`CycleEngine`] trait. The adapter builds the graph, invokes the engine,
//! and merges the graph into the report under a `graph` field; it never
//! interprets or validates the engine's output.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tangle_cycles::{FastAnalysis, FullAnalysis, Graph};

use crate::error::Result;
use crate::graph::schema_graph;

/// The cycle-analysis collaborator.
///
/// Implementations own the semantics of the report fields; this crate only
/// invokes and forwards. The default is [`DefaultEngine`], backed by the
/// `tangle-cycles` crate; tests may inject a stub.
pub trait CycleEngine {
    /// Precise analysis: distinct cycles and entrypoint chains.
    fn analyze(&self, graph: &Graph) -> FullAnalysis;

    /// Approximate analysis: flat cyclic membership, cheaper on large
    /// graphs.
    fn analyze_fast(&self, graph: &Graph) -> FastAnalysis;

    /// Order-canonicalize a precise report.
    fn sort_full(&self, analysis: FullAnalysis) -> FullAnalysis;

    /// Order-canonicalize an approximate report.
    fn sort_fast(&self, analysis: FastAnalysis) -> FastAnalysis;
}

/// The default engine, backed by `tangle-cycles`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEngine;

impl CycleEngine for DefaultEngine {
    fn analyze(&self, graph: &Graph) -> FullAnalysis {
        tangle_cycles::analyze(graph)
    }

    fn analyze_fast(&self, graph: &Graph) -> FastAnalysis {
        tangle_cycles::analyze_fast(graph)
    }

    fn sort_full(&self, analysis: FullAnalysis) -> FullAnalysis {
        tangle_cycles::sort_full_analysis(analysis)
    }

    fn sort_fast(&self, analysis: FastAnalysis) -> FastAnalysis {
        tangle_cycles::sort_fast_analysis(analysis)
    }
}

/// Full cycle report for the named types of one schema document.
///
/// The engine's [`FullAnalysis`] fields merged with the [`Graph`] they were
/// computed from; serializes to a single flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnalysis {
    /// Chains of non-cyclic types leading into a cycle.
    pub entrypoints: Vec<Vec<String>>,
    /// Every cycle among the definitions.
    pub cycles: Vec<Vec<String>>,
    /// Types that are cyclic or lead into a cycle.
    pub all: Vec<String>,
    /// Non-cyclic types the cyclic types depend on.
    pub dependencies: Vec<String>,
    /// Types depending on the cyclic cluster's dependencies without leading
    /// into a cycle.
    pub dependents: Vec<String>,
    /// The dependency graph the report was computed from.
    pub graph: Graph,
}

/// Fast cycle report for the named types of one schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnalysisFast {
    /// Types on a cycle, plus types that lead into one.
    pub cyclic: Vec<String>,
    /// Types the cyclic set depends on.
    pub dependencies: Vec<String>,
    /// Types depending on the cyclic set's dependencies without leading
    /// into a cycle.
    pub dependents: Vec<String>,
    /// The dependency graph the report was computed from.
    pub graph: Graph,
}

/// Analyzes `schema`'s definitions precisely with the default engine.
#[must_use]
pub fn analyze_types(schema: &Value) -> TypeAnalysis {
    analyze_types_with(&DefaultEngine, schema)
}

/// Analyzes `schema`'s definitions precisely with an injected engine.
pub fn analyze_types_with<E: CycleEngine + ?Sized>(engine: &E, schema: &Value) -> TypeAnalysis {
    let graph = schema_graph(schema);
    let FullAnalysis {
        entrypoints,
        cycles,
        all,
        dependencies,
        dependents,
    } = engine.analyze(&graph);

    TypeAnalysis {
        entrypoints,
        cycles,
        all,
        dependencies,
        dependents,
        graph,
    }
}

/// Analyzes `schema`'s definitions approximately with the default engine.
#[must_use]
pub fn analyze_types_fast(schema: &Value) -> TypeAnalysisFast {
    analyze_types_fast_with(&DefaultEngine, schema)
}

/// Analyzes `schema`'s definitions approximately with an injected engine.
pub fn analyze_types_fast_with<E: CycleEngine + ?Sized>(
    engine: &E,
    schema: &Value,
) -> TypeAnalysisFast {
    let graph = schema_graph(schema);
    let FastAnalysis {
        cyclic,
        dependencies,
        dependents,
    } = engine.analyze_fast(&graph);

    TypeAnalysisFast {
        cyclic,
        dependencies,
        dependents,
        graph,
    }
}

/// Parses `schema` as JSON text and analyzes it precisely.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if the text is not valid
/// JSON. Analysis itself cannot fail.
pub fn analyze_types_str(schema: &str) -> Result<TypeAnalysis> {
    let document: Value = serde_json::from_str(schema)?;
    Ok(analyze_types(&document))
}

/// Parses `schema` as JSON text and analyzes it approximately.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if the text is not valid
/// JSON. Analysis itself cannot fail.
pub fn analyze_types_fast_str(schema: &str) -> Result<TypeAnalysisFast> {
    let document: Value = serde_json::from_str(schema)?;
    Ok(analyze_types_fast(&document))
}
