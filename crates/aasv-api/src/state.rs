//! # Application State
//!
//! Shared state for the Axum application: the deep validator (wrapping
//! the test-engine HTTP client) and the configuration snapshot.

use std::sync::Arc;

use aasv_checker_client::{TestEngineClient, TestEngineConfig};
use aasv_engine::checker::CheckerError;
use aasv_engine::AasValidator;

use crate::config::Config;

/// Shared application state passed to all route handlers.
///
/// The validator owns the engine capability cache, so cloning the state
/// (per request) must not clone the validator — it is held behind an
/// `Arc` and shared process-wide.
#[derive(Clone)]
pub struct AppState {
    /// Deep validator over the test-engine HTTP client.
    pub validator: Arc<AasValidator<TestEngineClient>>,
    /// Configuration snapshot taken at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: Config) -> Result<Self, CheckerError> {
        let client = TestEngineClient::new(TestEngineConfig {
            base_url: config.checker_url.clone(),
            timeout_secs: config.checker_timeout_secs,
        })?;

        Ok(Self {
            validator: Arc::new(AasValidator::new(client)),
            config: Arc::new(config),
        })
    }
}
