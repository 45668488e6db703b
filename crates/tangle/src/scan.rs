//! `$ref` discovery and decoding.
//!
//! [`scan_refs`] walks an arbitrary JSON value and yields every string found
//! under a `$ref` key; [`decode_ref`] classifies such a string as a local
//! definition reference or drops it. Neither touches its input, and neither
//! has a failure path: an unrecognized reference is a normal outcome.

use serde_json::Value;

/// Literal prefix of a local definitions pointer.
const LOCAL_REF_PREFIX: &str = "#/definitions/";

/// Collects every string value stored under a `$ref` key anywhere in
/// `value`, in pre-order discovery order.
///
/// Objects are visited in key order and arrays element-wise; scalars
/// contribute nothing. No schema keyword is special-cased, so references
/// inside `properties`, `items`, `allOf` and the rest are all found. A
/// `$ref` key holding a non-string is skipped.
#[must_use]
pub fn scan_refs(value: &Value) -> Vec<&str> {
    let mut refs = Vec::new();
    walk(value, &mut refs);
    refs
}

fn walk<'a>(value: &'a Value, refs: &mut Vec<&'a str>) {
    match value {
        Value::Object(members) => {
            if let Some(Value::String(target)) = members.get("$ref") {
                refs.push(target);
            }
            for member in members.values() {
                walk(member, refs);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, refs);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

/// Decodes a raw `$ref` string into a local definition identifier.
///
/// Returns the verbatim remainder after the exact, case-sensitive
/// `#/definitions/` prefix. The identifier is not JSON-pointer unescaped
/// and may itself contain `/`. Anything else — another pointer shape, a
/// relative path, an absolute URL — is non-local and yields `None`.
#[must_use]
pub fn decode_ref(raw: &str) -> Option<&str> {
    raw.strip_prefix(LOCAL_REF_PREFIX)
}
