//! # Identifier Index
//!
//! Collects the IDs of every identifiable element in an environment —
//! shells, submodels, concept descriptions — for cross-reference
//! membership tests.

use std::collections::HashSet;

use serde_json::Value;

/// Top-level arrays holding identifiable elements, in document order.
const IDENTIFIABLE_ARRAYS: [&str; 3] = [
    "assetAdministrationShells",
    "submodels",
    "conceptDescriptions",
];

/// Collect the `id` of every identifiable element in the environment.
///
/// Missing arrays are treated as empty, not as an error. IDs are opaque
/// strings; duplicates collapse into one entry — the index answers
/// membership only, it does not enforce uniqueness.
pub fn collect_identifiers(environment: &Value) -> HashSet<String> {
    let mut ids = HashSet::new();
    for array in IDENTIFIABLE_ARRAYS {
        let Some(elements) = environment.get(array).and_then(Value::as_array) else {
            continue;
        };
        for element in elements {
            if let Some(id) = element.get("id").and_then(Value::as_str) {
                ids.insert(id.to_string());
            }
        }
    }
    ids
}
