//! # Diagnostic Model
//!
//! One reported finding: a JSON-pointer-like path into the document, a
//! human-readable message, the severity bucket it lands in, and an
//! optional dotted rule identifier. Diagnostics are immutable once
//! created and compared structurally — the report layer never
//! deduplicates them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single finding.
///
/// `Error` invalidates the document, `Warning` is advisory, and `Info`
/// is a positive confirmation (e.g. the external engine reporting full
/// metamodel compliance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The document is invalid.
    Error,
    /// Advisory finding; the document is still usable.
    Warning,
    /// Positive or neutral information.
    Info,
}

impl Severity {
    /// Lowercase string form, matching the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Diagnostic {
    /// JSON-pointer-like path to the offending node, always starting with `/`.
    pub path: String,
    /// Human-readable description of the finding.
    pub message: String,
    /// Severity bucket this finding belongs to.
    pub severity: Severity,
    /// Dotted rule identifier (e.g. `references.broken`), when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl Diagnostic {
    /// Construct a diagnostic with an explicit severity and rule.
    pub fn new(
        severity: Severity,
        path: impl Into<String>,
        message: impl Into<String>,
        rule: &str,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity,
            rule: Some(rule.to_string()),
        }
    }

    /// An `error` finding.
    pub fn error(path: impl Into<String>, message: impl Into<String>, rule: &str) -> Self {
        Self::new(Severity::Error, path, message, rule)
    }

    /// A `warning` finding.
    pub fn warning(path: impl Into<String>, message: impl Into<String>, rule: &str) -> Self {
        Self::new(Severity::Warning, path, message, rule)
    }

    /// An `info` finding.
    pub fn info(path: impl Into<String>, message: impl Into<String>, rule: &str) -> Self {
        Self::new(Severity::Info, path, message, rule)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.path, self.message)
    }
}
