//! # External Result Normalization
//!
//! Coerces the external engine's free-form outcome into the shared
//! diagnostic model. The engine guarantees only a compliance boolean and
//! a dump string; its issue collection is untyped and its shape has
//! varied across engine versions, so every coercion here is total — a
//! finding we cannot read becomes an error diagnostic, never a fault.

use serde_json::Value;

use aasv_core::{rules, Diagnostic, Severity};

use crate::checker::CheckOutcome;

/// How many characters of the engine dump the fallback diagnostic keeps.
const DUMP_EXCERPT_CHARS: usize = 500;

/// Severity-bucketed diagnostics produced by normalization.
#[derive(Debug, Default)]
pub struct NormalizedOutcome {
    /// Engine findings routed to the error bucket.
    pub errors: Vec<Diagnostic>,
    /// Engine findings routed to the warning bucket.
    pub warnings: Vec<Diagnostic>,
    /// Positive confirmations.
    pub info: Vec<Diagnostic>,
}

/// Normalize one checker outcome into diagnostics.
///
/// A compliant outcome yields exactly one info diagnostic. A failed
/// outcome is mined for a structured issue collection; when none is
/// discoverable the dump string is truncated into a single error.
pub fn normalize(outcome: &CheckOutcome) -> NormalizedOutcome {
    let mut out = NormalizedOutcome::default();

    if outcome.is_compliant() {
        out.info.push(Diagnostic::info(
            "/",
            "AAS structure is compliant with metamodel specification",
            rules::ENGINE_COMPLIANCE,
        ));
        return out;
    }

    match outcome.issues() {
        Some(issues) => flatten_issues(issues, &mut out),
        None => {
            let excerpt: String = outcome.dump().chars().take(DUMP_EXCERPT_CHARS).collect();
            out.errors.push(Diagnostic::error(
                "/",
                format!("AAS validation failed: {excerpt}"),
                rules::ENGINE_VALIDATION,
            ));
        }
    }

    out
}

/// Flatten the engine's issue collection.
///
/// An object maps paths to an issue or an array of issues; a bare array
/// holds issues with the path defaulted to `/`. Any other shape carries
/// nothing extractable.
fn flatten_issues(issues: &Value, out: &mut NormalizedOutcome) {
    match issues {
        Value::Object(map) => {
            for (path, entry) in map {
                match entry {
                    Value::Array(list) => {
                        for issue in list {
                            push_issue(path, issue, out);
                        }
                    }
                    other => push_issue(path, other, out),
                }
            }
        }
        Value::Array(list) => {
            for issue in list {
                push_issue("/", issue, out);
            }
        }
        _ => {}
    }
}

/// Coerce one issue into a diagnostic and route it to a bucket.
///
/// Unrecognized severity strings route to errors — findings we cannot
/// classify must not silently downgrade.
fn push_issue(path: &str, issue: &Value, out: &mut NormalizedOutcome) {
    let (message, severity, rule) = match issue {
        Value::String(s) => (s.clone(), None, None),
        Value::Object(map) => (
            map.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| issue.to_string()),
            map.get("severity").and_then(Value::as_str),
            map.get("rule").and_then(Value::as_str),
        ),
        other => (other.to_string(), None, None),
    };

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let severity = match severity {
        Some("warning") => Severity::Warning,
        _ => Severity::Error,
    };

    let diagnostic = Diagnostic::new(severity, path, message, rule.unwrap_or(rules::ENGINE));
    match severity {
        Severity::Warning => out.warnings.push(diagnostic),
        _ => out.errors.push(diagnostic),
    }
}
