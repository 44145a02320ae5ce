//! # Validation Orchestrator
//!
//! Composes the external compliance check with the three home-grown
//! walkers and assembles the final report. This is the only component
//! the transport layer calls.
//!
//! Every entry point returns a [`ValidationReport`]; faults anywhere in
//! the pipeline are converted into a single `validation.exception`
//! error diagnostic instead of propagating to the caller.

use std::time::Instant;

use serde_json::Value;
use tokio::sync::OnceCell;

use aasv_core::{rules, Diagnostic, ValidationReport};

use crate::checker::{CheckOutcome, CheckerError, ComplianceChecker, EngineVersions};
use crate::index::collect_identifiers;
use crate::normalize::normalize;
use crate::walk::{check_references, check_semantics, check_structure};

/// Report label for the deep validation pipeline.
pub const TEST_SUITE: &str = "aas-test-engines";

/// Caller-supplied options for one validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// Target metamodel version. Defaults to the engine's latest.
    pub version: Option<String>,
}

/// Deep validator: external compliance engine plus reference and
/// semantic walkers.
///
/// Cheap to share behind an `Arc`; one instance per process is the
/// expected deployment. The engine's version list is fetched once and
/// memoized for the life of the instance; a failed fetch is not cached
/// and is retried on the next access.
pub struct AasValidator<C> {
    checker: C,
    versions: OnceCell<EngineVersions>,
}

impl<C: ComplianceChecker> AasValidator<C> {
    /// Wrap a compliance checker.
    pub fn new(checker: C) -> Self {
        Self {
            checker,
            versions: OnceCell::new(),
        }
    }

    /// Supported and latest engine versions, fetched once per validator
    /// lifetime. Also serves the readiness probe.
    pub async fn engine_versions(&self) -> Result<&EngineVersions, CheckerError> {
        self.versions
            .get_or_try_init(|| self.checker.versions())
            .await
    }

    /// Validate a decoded environment document.
    ///
    /// Runs the external compliance check, normalizes its findings, then
    /// layers the structural, reference, and semantic passes on top. A
    /// checker failure aborts the pipeline and surfaces as a single
    /// `validation.exception` error.
    pub async fn validate(
        &self,
        environment: &Value,
        options: &ValidationOptions,
    ) -> ValidationReport {
        let started = Instant::now();

        let outcome = match self.check_environment(environment, options).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "compliance engine check failed");
                return exception_report(
                    format!("Validation exception: {e}"),
                    elapsed_ms(started),
                );
            }
        };

        let normalized = normalize(&outcome);
        let mut errors = normalized.errors;
        let mut warnings = normalized.warnings;
        let info = normalized.info;

        warnings.extend(check_structure(environment));

        let index = collect_identifiers(environment);
        let (reference_errors, reference_warnings) = check_references(environment, &index);
        errors.extend(reference_errors);
        warnings.extend(reference_warnings);

        warnings.extend(check_semantics(environment));

        tracing::debug!(
            errors = errors.len(),
            warnings = warnings.len(),
            "validation finished"
        );

        ValidationReport::from_buckets(TEST_SUITE, errors, warnings, info, elapsed_ms(started))
    }

    /// Validate raw JSON bytes.
    ///
    /// Malformed JSON short-circuits to an invalid report with a single
    /// `schema.json` error and zero duration; anything else delegates to
    /// [`Self::validate`] with default options.
    pub async fn validate_json_bytes(&self, content: &[u8]) -> ValidationReport {
        let environment: Value = match serde_json::from_slice(content) {
            Ok(value) => value,
            Err(e) => {
                return ValidationReport::from_buckets(
                    TEST_SUITE,
                    vec![Diagnostic::error(
                        "/",
                        format!("Invalid JSON: {e}"),
                        rules::SCHEMA_JSON,
                    )],
                    Vec::new(),
                    Vec::new(),
                    0.0,
                );
            }
        };
        self.validate(&environment, &ValidationOptions::default())
            .await
    }

    /// Validate a packaged AASX container directly via the engine.
    ///
    /// The walkers operate on decoded environment documents, not the
    /// container format, so this path is engine-only.
    pub async fn validate_package(&self, package: &[u8]) -> ValidationReport {
        let started = Instant::now();

        let outcome = match self.check_package_latest(package).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "compliance engine package check failed");
                return exception_report(
                    format!("AASX validation exception: {e}"),
                    elapsed_ms(started),
                );
            }
        };

        let normalized = normalize(&outcome);
        ValidationReport::from_buckets(
            TEST_SUITE,
            normalized.errors,
            normalized.warnings,
            normalized.info,
            elapsed_ms(started),
        )
    }

    async fn check_environment(
        &self,
        environment: &Value,
        options: &ValidationOptions,
    ) -> Result<CheckOutcome, CheckerError> {
        let version = match &options.version {
            Some(version) => version.clone(),
            None => self.engine_versions().await?.latest.clone(),
        };
        self.checker.check_document(environment, &version).await
    }

    async fn check_package_latest(&self, package: &[u8]) -> Result<CheckOutcome, CheckerError> {
        let version = self.engine_versions().await?.latest.clone();
        self.checker.check_package(package, &version).await
    }
}

/// Report carrying a single pipeline-fault diagnostic.
fn exception_report(message: String, duration_ms: f64) -> ValidationReport {
    ValidationReport::from_buckets(
        TEST_SUITE,
        vec![Diagnostic::error("/", message, rules::VALIDATION_EXCEPTION)],
        Vec::new(),
        Vec::new(),
        duration_ms,
    )
}

pub(crate) fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
