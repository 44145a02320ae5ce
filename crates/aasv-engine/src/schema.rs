//! # Schema-Only Quick Validation
//!
//! A lightweight shape check that runs without the external engine: the
//! document must be an object and the known top-level sequences must be
//! arrays. Full JSON Schema validation does not run on this path; deep
//! validation covers it through the engine.

use std::time::Instant;

use serde_json::Value;

use aasv_core::{rules, Diagnostic, ValidationReport};

use crate::validator::elapsed_ms;

/// Report label for the schema-only pass.
pub const TEST_SUITE: &str = "json-schema";

/// Top-level fields that must be arrays when present.
const TOP_LEVEL_ARRAYS: [&str; 3] = [
    "assetAdministrationShells",
    "submodels",
    "conceptDescriptions",
];

/// Quick structural check of an environment document.
pub fn validate_schema_only(environment: &Value) -> ValidationReport {
    let started = Instant::now();
    let mut errors = Vec::new();

    if !environment.is_object() {
        errors.push(Diagnostic::error(
            "/",
            "Environment must be an object",
            rules::SCHEMA_STRUCTURE,
        ));
    }

    for key in TOP_LEVEL_ARRAYS {
        if let Some(value) = environment.get(key) {
            if !value.is_array() {
                errors.push(Diagnostic::error(
                    format!("/{key}"),
                    format!("{key} must be an array"),
                    rules::SCHEMA_STRUCTURE,
                ));
            }
        }
    }

    ValidationReport::from_buckets(
        TEST_SUITE,
        errors,
        Vec::new(),
        Vec::new(),
        elapsed_ms(started),
    )
}
