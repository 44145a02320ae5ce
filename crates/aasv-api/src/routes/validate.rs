//! # Validation Routes
//!
//! Endpoints for validating AAS environment documents. All validation
//! outcomes — including thoroughly broken documents — are `200 OK` with
//! a report body; non-2xx responses mean the request itself was unusable.

use axum::extract::{Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use aasv_core::ValidationReport;
use aasv_engine::schema::validate_schema_only;
use aasv_engine::ValidationOptions;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Request body for JSON validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidationRequest {
    /// AAS environment document to validate.
    #[schema(value_type = Object)]
    pub environment: Value,
    /// Optional validation options.
    #[serde(default)]
    pub options: Option<ValidationOptionsBody>,
}

/// Caller-selectable validation options.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ValidationOptionsBody {
    /// Target metamodel version. Defaults to the engine's latest.
    pub version: Option<String>,
}

impl From<ValidationOptionsBody> for ValidationOptions {
    fn from(body: ValidationOptionsBody) -> Self {
        Self {
            version: body.version,
        }
    }
}

/// Catalog of validation rule categories and identifiers.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RulesCatalog {
    /// Coarse rule categories.
    pub categories: Vec<String>,
    /// Individual rule identifiers.
    pub rules: Vec<String>,
}

/// Build the validation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate/json", post(validate_json))
        .route("/validate/file", post(validate_file))
        .route("/validate/schema", post(validate_schema))
        .route("/validate/rules", get(list_rules))
}

/// POST /validate/json — Deep validation of an AAS environment.
///
/// Runs the external compliance engine plus the structural, reference,
/// and semantic passes.
#[utoipa::path(
    post,
    path = "/validate/json",
    request_body = ValidationRequest,
    responses(
        (status = 200, description = "Validation report", body = ValidationReport),
        (status = 422, description = "Unusable request body", body = ErrorBody),
    ),
    tag = "validation"
)]
pub async fn validate_json(
    State(state): State<AppState>,
    Json(request): Json<ValidationRequest>,
) -> Json<ValidationReport> {
    let options: ValidationOptions = request.options.unwrap_or_default().into();
    let report = state.validator.validate(&request.environment, &options).await;
    Json(report)
}

/// POST /validate/file — Validate an uploaded AASX or JSON file.
///
/// Dispatches on the uploaded filename: `.aasx` goes to the engine's
/// package check, `.json` through JSON decoding and deep validation.
#[utoipa::path(
    post,
    path = "/validate/file",
    responses(
        (status = 200, description = "Validation report", body = ValidationReport),
        (status = 422, description = "Missing file, missing filename, or unsupported extension", body = ErrorBody),
    ),
    tag = "validation"
)]
pub async fn validate_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ValidationReport>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_lowercase)
            .ok_or_else(|| AppError::Validation("filename required".to_string()))?;

        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let report = if filename.ends_with(".aasx") {
            state.validator.validate_package(&content).await
        } else if filename.ends_with(".json") {
            state.validator.validate_json_bytes(&content).await
        } else {
            return Err(AppError::Validation(
                "file must be .aasx or .json".to_string(),
            ));
        };

        return Ok(Json(report));
    }

    Err(AppError::Validation(
        "multipart field 'file' required".to_string(),
    ))
}

/// POST /validate/schema — Schema-only quick validation.
///
/// A lighter-weight shape check that does not invoke the external
/// engine.
#[utoipa::path(
    post,
    path = "/validate/schema",
    request_body = ValidationRequest,
    responses(
        (status = 200, description = "Validation report", body = ValidationReport),
    ),
    tag = "validation"
)]
pub async fn validate_schema(Json(request): Json<ValidationRequest>) -> Json<ValidationReport> {
    Json(validate_schema_only(&request.environment))
}

/// GET /validate/rules — List available validation rules.
///
/// The catalog is static: it advertises the rule namespace regardless of
/// which rules the current engine version emits.
#[utoipa::path(
    get,
    path = "/validate/rules",
    responses(
        (status = 200, description = "Rule catalog", body = RulesCatalog),
    ),
    tag = "validation"
)]
pub async fn list_rules() -> Json<RulesCatalog> {
    Json(RulesCatalog {
        categories: ["schema", "metamodel", "references", "semantics", "values"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rules: [
            "schema.structure",
            "schema.required_fields",
            "metamodel.constraints",
            "metamodel.cardinality",
            "references.integrity",
            "references.resolvable",
            "semantics.semantic_id",
            "semantics.value_type",
            "values.range",
            "values.pattern",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    })
}
