//! # Health Probe Routes
//!
//! Liveness is unconditional; readiness verifies the external test
//! engine answers its version query. The version list is memoized by the
//! validator, so a ready service stays ready without re-querying.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::SERVICE_VERSION;
use crate::state::AppState;

/// Liveness response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Availability of one backing validation engine.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EngineStatus {
    /// Whether the engine answered its capability query.
    pub available: bool,
    /// Metamodel versions the engine supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_versions: Option<Vec<String>>,
    /// The engine's default (latest) version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    /// Failure description when unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Readiness response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    /// `ready` or `not_ready`.
    pub status: String,
    /// Per-engine availability, keyed by engine name.
    pub validators: HashMap<String, EngineStatus>,
}

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

/// GET /health — Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}

/// GET /ready — Readiness probe.
///
/// Ready iff the compliance test engine is reachable and reports its
/// supported versions. Returns 503 with diagnostic detail otherwise.
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Test engine unavailable", body = ReadinessResponse),
    ),
    tag = "health"
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let engine = match state.validator.engine_versions().await {
        Ok(versions) => EngineStatus {
            available: true,
            supported_versions: Some(versions.supported.clone()),
            latest_version: Some(versions.latest.clone()),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "test engine not ready");
            EngineStatus {
                available: false,
                supported_versions: None,
                latest_version: None,
                error: Some(e.to_string()),
            }
        }
    };

    let (status, code) = if engine.available {
        ("ready", StatusCode::OK)
    } else {
        ("not_ready", StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = ReadinessResponse {
        status: status.to_string(),
        validators: HashMap::from([("aas-test-engines".to_string(), engine)]),
    };

    (code, Json(response))
}
