//! # Validation Report
//!
//! The aggregated outcome of one validation run: severity-bucketed
//! diagnostics plus the label of the engine that produced them and the
//! wall-clock duration of the run. Reports are created once per call and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;

/// Result of one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationReport {
    /// True iff the error bucket is empty.
    pub valid: bool,
    /// Findings that invalidate the document.
    pub errors: Vec<Diagnostic>,
    /// Advisory findings.
    pub warnings: Vec<Diagnostic>,
    /// Positive or neutral findings.
    pub info: Vec<Diagnostic>,
    /// Label of the engine that produced this report.
    pub test_suite: String,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: f64,
}

impl ValidationReport {
    /// Assemble a report from severity buckets, deriving `valid` from the
    /// error bucket.
    pub fn from_buckets(
        test_suite: impl Into<String>,
        errors: Vec<Diagnostic>,
        warnings: Vec<Diagnostic>,
        info: Vec<Diagnostic>,
        duration_ms: f64,
    ) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            info,
            test_suite: test_suite.into(),
            duration_ms,
        }
    }

    /// Total number of diagnostics across all buckets.
    pub fn finding_count(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }
}
