//! Recursive type detection for JSON Schema documents.
//!
//! Schema-driven code generators need to know, before emitting type
//! declarations, which named types are recursive. This crate extracts the
//! directed dependency graph induced by local `$ref` pointers between the
//! entries of a schema's `definitions` map, hands it to a cycle-analysis
//! engine, and returns a report describing which types are cyclic, which
//! lead into a cycle, and which merely sit upstream or downstream of one.
//!
//! The engine is injected behind the [`CycleEngine`] trait; the default is
//! the `tangle-cycles` crate. Raw reports are deterministic but ordered by
//! traversal; pass them through [`sort_type_analysis`] /
//! [`sort_type_analysis_fast`] to obtain a canonical form that is safe to
//! diff or snapshot.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tangle::analyze_types;
//!
//! let schema = json!({
//!     "definitions": {
//!         "User": {
//!             "type": "object",
//!             "properties": {
//!                 "parent": { "$ref": "#/definitions/User" },
//!             },
//!         },
//!     },
//! });
//!
//! let analysis = analyze_types(&schema);
//! assert_eq!(analysis.cycles, vec![vec!["User".to_string()]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyze;
pub mod error;
pub mod graph;
pub mod scan;
pub mod sort;

pub use analyze::{
    CycleEngine, DefaultEngine, TypeAnalysis, TypeAnalysisFast, analyze_types,
    analyze_types_fast, analyze_types_fast_str, analyze_types_fast_with, analyze_types_str,
    analyze_types_with,
};
pub use error::{Error, Result};
pub use graph::schema_graph;
pub use sort::{
    sort_graph, sort_type_analysis, sort_type_analysis_fast, sort_type_analysis_fast_with,
    sort_type_analysis_with,
};

pub use tangle_cycles::{Edge, FastAnalysis, FullAnalysis, Graph};
