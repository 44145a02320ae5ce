//! # Rule Identifiers
//!
//! Well-known dotted rule identifiers attached to diagnostics. The HTTP
//! rules catalog advertises the full set of rule names; the engine emits
//! the subset below.

/// Input bytes were not valid JSON.
pub const SCHEMA_JSON: &str = "schema.json";

/// Basic document shape problem (missing or mistyped top-level array).
pub const SCHEMA_STRUCTURE: &str = "schema.structure";

/// A shell's submodel reference does not resolve inside the document.
pub const REFERENCES_BROKEN: &str = "references.broken";

/// A `derivedFrom` reference does not resolve inside the document.
pub const REFERENCES_EXTERNAL: &str = "references.external";

/// An element-level reference does not resolve inside the document.
pub const REFERENCES_UNKNOWN: &str = "references.unknown";

/// A submodel carries no semantic annotation.
pub const SEMANTICS_SEMANTIC_ID: &str = "semantics.semantic_id";

/// Default rule for findings coerced from the external engine.
pub const ENGINE: &str = "aas-test-engines";

/// The external engine confirmed metamodel compliance.
pub const ENGINE_COMPLIANCE: &str = "aas-test-engines.compliance";

/// The external engine failed the document without structured issues.
pub const ENGINE_VALIDATION: &str = "aas-test-engines.validation";

/// The validation pipeline itself failed; the report carries the fault.
pub const VALIDATION_EXCEPTION: &str = "validation.exception";
