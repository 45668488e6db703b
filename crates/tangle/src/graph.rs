//! Dependency graph construction from schema definitions.

use serde_json::Value;
use tangle_cycles::Graph;

use crate::scan::{decode_ref, scan_refs};

/// Builds the dependency graph of a schema document's named types.
///
/// Each key of the document's `definitions` map produces exactly one edge,
/// in document order: the definition name paired with every local
/// definition it references, deduplicated by first occurrence but otherwise
/// in discovery order. A self-reference is recorded once. References to
/// names that are not themselves defined are kept verbatim in the target
/// list without producing an edge of their own, and non-local references
/// are silently excluded.
///
/// A document without a `definitions` object — including a non-object
/// document — yields an empty graph. The input is never mutated and there
/// is no failure path.
#[must_use]
pub fn schema_graph(schema: &Value) -> Graph {
    let Some(definitions) = schema.get("definitions").and_then(Value::as_object) else {
        return Graph::new();
    };

    let graph: Graph = definitions
        .iter()
        .map(|(name, subschema)| {
            let mut targets: Vec<String> = Vec::new();
            for raw in scan_refs(subschema) {
                if let Some(target) = decode_ref(raw) {
                    if !targets.iter().any(|seen| seen == target) {
                        targets.push(target.to_owned());
                    }
                }
            }
            (name.clone(), targets)
        })
        .collect();

    tracing::debug!(definitions = graph.len(), "built schema dependency graph");
    graph
}
