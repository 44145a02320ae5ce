//! # Validation Walkers
//!
//! Three independent passes over an environment document: structural
//! shape checks, recursive cross-reference integrity checks, and
//! semantic-annotation presence checks. Each pass produces diagnostics;
//! none of them can fail.

use std::collections::HashSet;

use serde_json::Value;

use aasv_core::{rules, Diagnostic};

use crate::elements::ElementKind;
use crate::reference::reference_target;

/// Iterate an expected array field, treating anything else as empty.
fn as_elements(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Structural pass: required top-level arrays are present.
///
/// Emits warnings only — type and cardinality checking is the external
/// engine's job.
pub fn check_structure(environment: &Value) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();
    for key in ["assetAdministrationShells", "submodels"] {
        if environment.get(key).is_none() {
            warnings.push(Diagnostic::warning(
                "/",
                format!("Missing {key} array"),
                rules::SCHEMA_STRUCTURE,
            ));
        }
    }
    warnings
}

/// Reference pass: every extractable cross-reference target must either
/// resolve against the identifier index or be reported.
///
/// Shell→submodel linkage is load-bearing and reported as an error; all
/// other reference kinds may legitimately point outside the document and
/// are reported as warnings.
pub fn check_references(
    environment: &Value,
    index: &HashSet<String>,
) -> (Vec<Diagnostic>, Vec<Diagnostic>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (i, shell) in as_elements(environment.get("assetAdministrationShells"))
        .iter()
        .enumerate()
    {
        for (j, submodel_ref) in as_elements(shell.get("submodels")).iter().enumerate() {
            if let Some(target) = reference_target(submodel_ref) {
                if !index.contains(target) {
                    errors.push(Diagnostic::error(
                        format!("/assetAdministrationShells/{i}/submodels/{j}"),
                        format!("Submodel reference points to non-existent element: {target}"),
                        rules::REFERENCES_BROKEN,
                    ));
                }
            }
        }

        if let Some(derived) = shell.get("derivedFrom") {
            if let Some(target) = reference_target(derived) {
                if !index.contains(target) {
                    warnings.push(Diagnostic::warning(
                        format!("/assetAdministrationShells/{i}/derivedFrom"),
                        format!("derivedFrom reference points to non-existent shell: {target}"),
                        rules::REFERENCES_EXTERNAL,
                    ));
                }
            }
        }
    }

    for (i, submodel) in as_elements(environment.get("submodels")).iter().enumerate() {
        check_elements(
            as_elements(submodel.get("submodelElements")),
            &format!("/submodels/{i}/submodelElements"),
            index,
            &mut warnings,
        );
    }

    (errors, warnings)
}

/// Recursive element check: walk one element array, checking reference
/// content per element kind and recursing into nested collections/lists.
fn check_elements(
    elements: &[Value],
    base_path: &str,
    index: &HashSet<String>,
    warnings: &mut Vec<Diagnostic>,
) {
    for (k, element) in elements.iter().enumerate() {
        let path = format!("{base_path}/{k}");
        match ElementKind::of(element) {
            ElementKind::Reference => {
                warn_unknown(
                    element.get("value"),
                    &path,
                    "ReferenceElement points to unknown element",
                    index,
                    warnings,
                );
            }
            ElementKind::Relationship => {
                warn_unknown(
                    element.get("first"),
                    &format!("{path}/first"),
                    "RelationshipElement.first points to unknown element",
                    index,
                    warnings,
                );
                warn_unknown(
                    element.get("second"),
                    &format!("{path}/second"),
                    "RelationshipElement.second points to unknown element",
                    index,
                    warnings,
                );
            }
            // globalAssetId is always treated as external; nothing to resolve.
            ElementKind::Entity => {}
            ElementKind::Collection | ElementKind::List => {
                if let Some(nested) = element.get("value").and_then(Value::as_array) {
                    check_elements(nested, &format!("{path}/value"), index, warnings);
                }
            }
            ElementKind::Other => {}
        }
    }
}

/// Element-level references are commonly external, so unresolved targets
/// escalate only to warnings, never errors.
fn warn_unknown(
    reference: Option<&Value>,
    path: &str,
    what: &str,
    index: &HashSet<String>,
    warnings: &mut Vec<Diagnostic>,
) {
    let Some(target) = reference.and_then(reference_target) else {
        return;
    };
    if !index.contains(target) {
        warnings.push(Diagnostic::warning(
            path,
            format!("{what}: {target}"),
            rules::REFERENCES_UNKNOWN,
        ));
    }
}

/// Semantic pass: every submodel should carry a `semanticId`.
///
/// Shallow check only; value types and patterns are the external
/// engine's territory.
pub fn check_semantics(environment: &Value) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();
    for (i, submodel) in as_elements(environment.get("submodels")).iter().enumerate() {
        if submodel.get("semanticId").is_none() {
            warnings.push(Diagnostic::warning(
                format!("/submodels/{i}"),
                "Submodel missing semanticId",
                rules::SEMANTICS_SEMANTIC_ID,
            ));
        }
    }
    warnings
}
