//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AAS Validation Service",
        version = "0.1.0",
        description = "Deep validation for Asset Administration Shell environments.\n\nProvides:\n- **Deep validation** of AAS environment JSON via the external compliance test engine plus structural, reference-integrity, and semantic passes\n- **File validation** for uploaded `.aasx` packages and `.json` environments\n- **Schema-only quick checks** without the external engine\n- **Rule catalog** for client-side filtering\n\nAll validation outcomes return `200 OK` with a severity-bucketed report; `valid` is true iff the error bucket is empty.",
        license(name = "AGPL-3.0-or-later"),
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
    ),
    paths(
        crate::routes::validate::validate_json,
        crate::routes::validate::validate_file,
        crate::routes::validate::validate_schema,
        crate::routes::validate::list_rules,
        crate::routes::health::health,
        crate::routes::health::ready,
    ),
    components(schemas(
        crate::routes::validate::ValidationRequest,
        crate::routes::validate::ValidationOptionsBody,
        crate::routes::validate::RulesCatalog,
        crate::routes::health::HealthResponse,
        crate::routes::health::ReadinessResponse,
        crate::routes::health::EngineStatus,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        aasv_core::Diagnostic,
        aasv_core::Severity,
        aasv_core::ValidationReport,
    )),
    tags(
        (name = "validation", description = "AAS document validation"),
        (name = "health", description = "Service health probes"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_spec))
}

/// GET /openapi.json — The generated OpenAPI document.
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
