//! # aasv-checker-client — HTTP Client for the Compliance Test Engine
//!
//! Typed reqwest client for the external AAS compliance test-engine
//! service. Implements [`ComplianceChecker`] so the orchestrator and the
//! API layer compose against the capability rather than the transport.
//!
//! ## Wire Contract
//!
//! - `GET  {base}/versions` → `{"supported": [...], "latest": "..."}`
//! - `POST {base}/check/document?version=` — environment JSON body
//! - `POST {base}/check/package?version=` — AASX bytes (octet-stream)
//!
//! Responses to both check endpoints carry at least `compliant` and
//! `dump`; everything beyond that is engine-version-specific and is
//! passed through raw for best-effort issue extraction.
//!
//! ## Timeout & Retry
//!
//! One per-request timeout, configurable via [`TestEngineConfig`].
//! Retries are NOT built in — validation is a single deterministic pass
//! and a failed check is reported, not retried.

use std::time::Duration;

use serde_json::Value;

use aasv_engine::checker::{CheckOutcome, CheckerError, ComplianceChecker, EngineVersions};

/// Configuration for the test-engine HTTP client.
#[derive(Debug, Clone)]
pub struct TestEngineConfig {
    /// Base URL of the test-engine service (e.g. `http://localhost:8090`).
    pub base_url: String,
    /// Request timeout in seconds (default: 60).
    pub timeout_secs: u64,
}

impl TestEngineConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 60,
        }
    }
}

/// HTTP client for the external compliance test-engine service.
///
/// `Send + Sync`; designed to be shared via `Arc` across async tasks.
#[derive(Debug, Clone)]
pub struct TestEngineClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestEngineClient {
    /// Build a client from configuration.
    pub fn new(config: TestEngineConfig) -> Result<Self, CheckerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CheckerError::Unreachable {
                endpoint: config.base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a check request and decode the raw outcome.
    async fn read_outcome(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<CheckOutcome, CheckerError> {
        let response = request
            .send()
            .await
            .map_err(|e| CheckerError::Unreachable {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckerError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let raw: Value = response.json().await.map_err(|e| CheckerError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(endpoint, "test engine check completed");
        Ok(CheckOutcome::from_raw(raw))
    }
}

impl ComplianceChecker for TestEngineClient {
    async fn versions(&self) -> Result<EngineVersions, CheckerError> {
        let endpoint = format!("{}/versions", self.base_url);
        let response =
            self.client
                .get(&endpoint)
                .send()
                .await
                .map_err(|e| CheckerError::Unreachable {
                    endpoint: endpoint.clone(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckerError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<EngineVersions>()
            .await
            .map_err(|e| CheckerError::Decode {
                endpoint,
                reason: e.to_string(),
            })
    }

    async fn check_document(
        &self,
        environment: &Value,
        version: &str,
    ) -> Result<CheckOutcome, CheckerError> {
        let endpoint = format!("{}/check/document", self.base_url);
        let request = self
            .client
            .post(&endpoint)
            .query(&[("version", version)])
            .json(environment);
        self.read_outcome(request, &endpoint).await
    }

    async fn check_package(
        &self,
        package: &[u8],
        version: &str,
    ) -> Result<CheckOutcome, CheckerError> {
        let endpoint = format!("{}/check/package", self.base_url);
        let request = self
            .client
            .post(&endpoint)
            .query(&[("version", version)])
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(package.to_vec());
        self.read_outcome(request, &endpoint).await
    }
}
