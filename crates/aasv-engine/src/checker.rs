//! # Compliance Checker Capability Interface
//!
//! The external compliance test engine is a black box with two guaranteed
//! operations — a compliance boolean and a human-readable dump — plus an
//! optional, untyped issue collection whose shape has varied across
//! engine versions. This module models that contract as a trait so the
//! orchestrator composes against the capability, not a transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Supported and latest target metamodel versions reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineVersions {
    /// Metamodel versions the engine can check against.
    pub supported: Vec<String>,
    /// The version used when a caller does not pick one.
    pub latest: String,
}

/// Error talking to the external compliance engine.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The engine endpoint could not be reached.
    #[error("compliance engine unreachable at {endpoint}: {reason}")]
    Unreachable {
        /// Endpoint that was being called.
        endpoint: String,
        /// Transport-level failure description.
        reason: String,
    },

    /// The engine responded with a non-success status.
    #[error("compliance engine {endpoint} returned {status}: {body}")]
    Api {
        /// Endpoint that was being called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body excerpt.
        body: String,
    },

    /// The engine response could not be decoded.
    #[error("undecodable response from {endpoint}: {reason}")]
    Decode {
        /// Endpoint that was being called.
        endpoint: String,
        /// Decoding failure description.
        reason: String,
    },
}

/// Outcome of one compliance check.
///
/// Only the compliance flag and the dump string are guaranteed. The raw
/// response value is kept so the normalizer can probe for a structured
/// issue collection without assuming one fixed schema.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    compliant: bool,
    dump: String,
    raw: Value,
}

impl CheckOutcome {
    /// Build an outcome from the engine's raw response value.
    ///
    /// `compliant` defaults to false and `dump` to empty when the fields
    /// are absent — a response we cannot read counts as a failed check.
    pub fn from_raw(raw: Value) -> Self {
        let compliant = raw
            .get("compliant")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let dump = raw
            .get("dump")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { compliant, dump, raw }
    }

    /// Build an outcome from parts. Used by stub engines and tests.
    pub fn new(compliant: bool, dump: impl Into<String>, raw: Value) -> Self {
        Self {
            compliant,
            dump: dump.into(),
            raw,
        }
    }

    /// Whether the engine found the document compliant.
    pub fn is_compliant(&self) -> bool {
        self.compliant
    }

    /// Human-readable engine output, unstructured.
    pub fn dump(&self) -> &str {
        &self.dump
    }

    /// Best-effort structured issue collection.
    ///
    /// Engine versions have shipped the collection under `_issues` and
    /// under `issues`; probe both, in that order.
    pub fn issues(&self) -> Option<&Value> {
        self.raw.get("_issues").or_else(|| self.raw.get("issues"))
    }
}

/// Capability interface of the external compliance engine.
///
/// Implementations must be `Send + Sync`; the validator shares one
/// instance across concurrent validation calls.
#[allow(async_fn_in_trait)]
pub trait ComplianceChecker: Send + Sync {
    /// Query supported and latest metamodel versions.
    async fn versions(&self) -> Result<EngineVersions, CheckerError>;

    /// Check a decoded environment document against a metamodel version.
    async fn check_document(
        &self,
        environment: &Value,
        version: &str,
    ) -> Result<CheckOutcome, CheckerError>;

    /// Check a packaged AASX container directly.
    async fn check_package(
        &self,
        package: &[u8],
        version: &str,
    ) -> Result<CheckOutcome, CheckerError>;
}
