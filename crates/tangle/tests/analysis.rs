//! End-to-end tests for schema analysis in both modes.
//!
//! Raw output order is traversal-dependent, so multi-type scenarios compare
//! canonicalized results on both sides, the same way a caller diffing
//! golden files would.

use serde_json::{Value, json};
use tangle::{
    TypeAnalysis, TypeAnalysisFast, analyze_types, analyze_types_fast, sort_type_analysis,
    sort_type_analysis_fast,
};

fn edge(from: &str, to: &[&str]) -> (String, Vec<String>) {
    (from.to_owned(), to.iter().map(|&t| t.to_owned()).collect())
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|&n| n.to_owned()).collect()
}

fn chains(items: &[&[&str]]) -> Vec<Vec<String>> {
    items.iter().map(|chain| names(chain)).collect()
}

/// The multi-type scenario: `Message` and `User` are mutually cyclic (and
/// each self-cyclic), `Subscriber` completes the larger cycle, `DM` and
/// `Actions` lead into it, `Link` hangs off it, and `Product`/`Cart` are
/// unrelated to any cycle.
fn complex_schema() -> Value {
    json!({
        "definitions": {
            "Link": {},
            "Subscriber": {
                "type": "object",
                "properties": {
                    "user": { "$ref": "#/definitions/User" },
                },
            },
            "Message": {
                "type": "object",
                "properties": {
                    "replyTo": { "$ref": "#/definitions/Message" },
                    "link": { "$ref": "#/definitions/Link" },
                    "subscriber": { "$ref": "#/definitions/Subscriber" },
                },
            },
            "User": {
                "type": "object",
                "properties": {
                    "parent": { "$ref": "#/definitions/User" },
                    "lastMessage": { "$ref": "#/definitions/Message" },
                },
            },
            "DM": {
                "type": "object",
                "properties": {
                    "lastUser": { "$ref": "#/definitions/User" },
                },
            },
            "Actions": {
                "type": "object",
                "properties": {
                    "dms": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/DM" },
                    },
                },
            },
            "Product": { "$ref": "#/non-local-dep/Foo" },
            "Cart": {
                "type": "array",
                "items": { "$ref": "#/definitions/Product" },
            },
        },
    })
}

#[test]
fn no_definitions_yields_empty_report() {
    assert_eq!(analyze_types(&json!({})), TypeAnalysis::default());
    assert_eq!(analyze_types_fast(&json!({})), TypeAnalysisFast::default());
}

#[test]
fn empty_definitions_yield_empty_report() {
    let schema = json!({ "definitions": {} });
    assert_eq!(analyze_types(&schema), TypeAnalysis::default());
    assert_eq!(analyze_types_fast(&schema), TypeAnalysisFast::default());
}

#[test]
fn simple_type_appears_only_in_the_graph() {
    let schema = json!({ "definitions": { "User": {} } });

    assert_eq!(
        analyze_types(&schema),
        TypeAnalysis {
            graph: vec![edge("User", &[])],
            ..TypeAnalysis::default()
        }
    );
    assert_eq!(
        analyze_types_fast(&schema),
        TypeAnalysisFast {
            graph: vec![edge("User", &[])],
            ..TypeAnalysisFast::default()
        }
    );
}

#[test]
fn single_recursive_type() {
    let schema = json!({
        "definitions": {
            "User": {
                "type": "object",
                "properties": {
                    "parent": { "$ref": "#/definitions/User" },
                },
            },
        },
    });

    assert_eq!(
        analyze_types(&schema),
        TypeAnalysis {
            cycles: chains(&[&["User"]]),
            all: names(&["User"]),
            graph: vec![edge("User", &["User"])],
            ..TypeAnalysis::default()
        }
    );
    assert_eq!(
        analyze_types_fast(&schema),
        TypeAnalysisFast {
            cyclic: names(&["User"]),
            graph: vec![edge("User", &["User"])],
            ..TypeAnalysisFast::default()
        }
    );
}

#[test]
fn complex_schema_full_analysis() {
    let expected = TypeAnalysis {
        entrypoints: chains(&[&["DM"], &["Actions", "DM"]]),
        cycles: chains(&[
            &["User"],
            &["Message"],
            &["User", "Message", "Subscriber"],
        ]),
        all: names(&["User", "Message", "DM", "Actions", "Subscriber"]),
        dependencies: names(&["Link"]),
        dependents: names(&[]),
        graph: vec![
            edge("Link", &[]),
            edge("Subscriber", &["User"]),
            edge("Message", &["Message", "Link", "Subscriber"]),
            edge("User", &["User", "Message"]),
            edge("DM", &["User"]),
            edge("Actions", &["DM"]),
            edge("Product", &[]),
            edge("Cart", &["Product"]),
        ],
    };

    assert_eq!(
        sort_type_analysis(analyze_types(&complex_schema())),
        sort_type_analysis(expected)
    );
}

#[test]
fn complex_schema_fast_analysis() {
    let expected = TypeAnalysisFast {
        cyclic: names(&["User", "Message", "DM", "Actions", "Subscriber"]),
        dependencies: names(&["Link"]),
        dependents: names(&[]),
        graph: vec![
            edge("Link", &[]),
            edge("Subscriber", &["User"]),
            edge("Message", &["Message", "Link", "Subscriber"]),
            edge("User", &["User", "Message"]),
            edge("DM", &["User"]),
            edge("Actions", &["DM"]),
            edge("Product", &[]),
            edge("Cart", &["Product"]),
        ],
    };

    assert_eq!(
        sort_type_analysis_fast(analyze_types_fast(&complex_schema())),
        sort_type_analysis_fast(expected)
    );
}

#[test]
fn sort_full_report_orders_every_field() {
    let report = TypeAnalysis {
        entrypoints: chains(&[]),
        cycles: chains(&[]),
        all: names(&[]),
        dependencies: names(&["b", "a"]),
        dependents: names(&[]),
        graph: vec![
            edge("x", &["a", "c", "b"]),
            edge("f", &["g", "h"]),
            edge("g", &["h", "f", "g"]),
        ],
    };

    assert_eq!(
        sort_type_analysis(report),
        TypeAnalysis {
            entrypoints: chains(&[]),
            cycles: chains(&[]),
            all: names(&[]),
            dependencies: names(&["a", "b"]),
            dependents: names(&[]),
            graph: vec![
                edge("f", &["g", "h"]),
                edge("g", &["f", "g", "h"]),
                edge("x", &["a", "b", "c"]),
            ],
        }
    );
}

#[test]
fn sort_fast_report_orders_every_field() {
    let report = TypeAnalysisFast {
        cyclic: names(&["b", "a", "c"]),
        dependencies: names(&["y", "x"]),
        dependents: names(&["z", "w"]),
        graph: vec![
            edge("x", &["a", "c", "b"]),
            edge("f", &["g", "h"]),
            edge("g", &["h", "f", "g"]),
        ],
    };

    assert_eq!(
        sort_type_analysis_fast(report),
        TypeAnalysisFast {
            cyclic: names(&["a", "b", "c"]),
            dependencies: names(&["x", "y"]),
            dependents: names(&["w", "z"]),
            graph: vec![
                edge("f", &["g", "h"]),
                edge("g", &["f", "g", "h"]),
                edge("x", &["a", "b", "c"]),
            ],
        }
    );
}

#[test]
fn dangling_reference_never_gains_an_edge() {
    let schema = json!({
        "definitions": {
            "A": { "$ref": "#/definitions/Z" },
        },
    });

    let report = analyze_types(&schema);
    assert_eq!(report.graph, vec![edge("A", &["Z"])]);
    assert!(report.cycles.is_empty());
}

#[test]
fn repeated_analysis_is_structurally_equal() {
    let schema = complex_schema();
    assert_eq!(analyze_types(&schema), analyze_types(&schema));
    assert_eq!(analyze_types_fast(&schema), analyze_types_fast(&schema));
}

#[test]
fn canonical_reports_serialize_to_stable_json() {
    let report = sort_type_analysis(analyze_types(&complex_schema()));
    let first = serde_json::to_string(&report).unwrap();
    let again = sort_type_analysis(analyze_types(&complex_schema()));
    let second = serde_json::to_string(&again).unwrap();
    assert_eq!(first, second);
}
