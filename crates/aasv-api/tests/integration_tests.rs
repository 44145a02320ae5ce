//! # Integration tests for aasv-api
//!
//! Drives the assembled router with `tower::ServiceExt::oneshot` against
//! a wiremock server standing in for the external compliance test
//! engine.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aasv_api::config::Config;
use aasv_api::{app, AppState};
use aasv_core::ValidationReport;

/// Build the test app against a given engine base URL.
fn test_app(engine_url: &str) -> axum::Router {
    let state = AppState::new(Config::with_checker_url(engine_url)).unwrap();
    app(state)
}

/// Stand up a mock engine that reports versions and a compliant check.
async fn compliant_engine() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "supported": ["3.0"],
            "latest": "3.0",
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/check/document"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "compliant": true,
            "dump": "ok",
        })))
        .mount(&server)
        .await;
    server
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn clean_environment() -> Value {
    json!({
        "assetAdministrationShells": [{
            "modelType": "AssetAdministrationShell",
            "id": "https://example.com/aas/1",
            "submodels": [{
                "type": "ModelReference",
                "keys": [{"type": "Submodel", "value": "https://example.com/submodel/1"}],
            }],
        }],
        "submodels": [{
            "modelType": "Submodel",
            "id": "https://example.com/submodel/1",
            "semanticId": {
                "type": "ExternalReference",
                "keys": [{"type": "GlobalReference", "value": "https://example.com/semantic"}],
            },
            "submodelElements": [],
        }],
        "conceptDescriptions": [],
    })
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn ready_returns_503_when_engine_unreachable() {
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = body_json(response).await;
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["validators"]["aas-test-engines"]["available"], false);
}

#[tokio::test]
async fn ready_reports_versions_and_memoizes_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "supported": ["3.0", "3.1"],
            "latest": "3.1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = body_json(response).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(
            body["validators"]["aas-test-engines"]["latest_version"],
            "3.1"
        );
    }
    // The expect(1) on the mock verifies the capability cache held.
}

// -- Deep Validation ----------------------------------------------------------

#[tokio::test]
async fn validate_json_accepts_clean_environment() {
    let server = compliant_engine().await;
    let app = test_app(&server.uri());

    let response = app
        .oneshot(post_json(
            "/validate/json",
            json!({"environment": clean_environment()}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report: ValidationReport = body_json(response).await;
    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(report.test_suite, "aas-test-engines");
}

#[tokio::test]
async fn validate_json_flags_broken_submodel_reference() {
    let server = compliant_engine().await;
    let app = test_app(&server.uri());

    let environment = json!({
        "assetAdministrationShells": [{
            "id": "https://example.com/aas/1",
            "submodels": [{
                "type": "ModelReference",
                "keys": [{"type": "Submodel", "value": "https://example.com/submodel/NONEXISTENT"}],
            }],
        }],
        "submodels": [],
    });

    let response = app
        .oneshot(post_json("/validate/json", json!({"environment": environment})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report: ValidationReport = body_json(response).await;
    assert!(!report.valid);
    assert!(report
        .errors
        .iter()
        .any(|e| e.message.to_lowercase().contains("non-existent")));
}

#[tokio::test]
async fn validate_json_warns_on_missing_semantic_id() {
    let server = compliant_engine().await;
    let app = test_app(&server.uri());

    let environment = json!({
        "assetAdministrationShells": [],
        "submodels": [{
            "modelType": "Submodel",
            "id": "https://example.com/submodel/1",
            "idShort": "NoSemanticId",
            "submodelElements": [],
        }],
    });

    let response = app
        .oneshot(post_json("/validate/json", json!({"environment": environment})))
        .await
        .unwrap();
    let report: ValidationReport = body_json(response).await;
    assert!(report
        .warnings
        .iter()
        .any(|w| w.message.contains("semanticId")));
}

#[tokio::test]
async fn validate_json_surfaces_engine_failure_as_exception_report() {
    let app = test_app("http://127.0.0.1:1");

    let response = app
        .oneshot(post_json(
            "/validate/json",
            json!({"environment": clean_environment()}),
        ))
        .await
        .unwrap();
    // The pipeline never fails the caller; the fault is in the report.
    assert_eq!(response.status(), StatusCode::OK);

    let report: ValidationReport = body_json(response).await;
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].rule.as_deref(),
        Some("validation.exception")
    );
}

#[tokio::test]
async fn validate_json_forwards_explicit_version() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check/document"))
        .and(wiremock::matchers::query_param("version", "3.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "compliant": true,
            "dump": "ok",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let response = app
        .oneshot(post_json(
            "/validate/json",
            json!({
                "environment": clean_environment(),
                "options": {"version": "3.0"},
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Schema-Only Validation ---------------------------------------------------

#[tokio::test]
async fn validate_schema_runs_without_the_engine() {
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(post_json(
            "/validate/schema",
            json!({"environment": {"assetAdministrationShells": [], "submodels": []}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report: ValidationReport = body_json(response).await;
    assert!(report.valid);
    assert_eq!(report.test_suite, "json-schema");
}

#[tokio::test]
async fn validate_schema_rejects_mistyped_arrays() {
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(post_json(
            "/validate/schema",
            json!({"environment": {"submodels": "not an array"}}),
        ))
        .await
        .unwrap();
    let report: ValidationReport = body_json(response).await;
    assert!(!report.valid);
    assert_eq!(report.errors[0].path, "/submodels");
}

// -- Rules Catalog ------------------------------------------------------------

#[tokio::test]
async fn rules_catalog_is_static() {
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/validate/rules")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = body_json(response).await;
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 5);
    assert!(categories.contains(&json!("references")));
    let rules = body["rules"].as_array().unwrap();
    assert!(rules.contains(&json!("semantics.semantic_id")));
}

// -- File Upload --------------------------------------------------------------

fn multipart_request(filename: &str, content: &[u8]) -> Request<Body> {
    let boundary = "aasv-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/validate/file")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn uploaded_json_file_is_validated() {
    let server = compliant_engine().await;
    let app = test_app(&server.uri());

    let content = serde_json::to_vec(&clean_environment()).unwrap();
    let response = app
        .oneshot(multipart_request("environment.json", &content))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report: ValidationReport = body_json(response).await;
    assert!(report.valid);
}

#[tokio::test]
async fn uploaded_malformed_json_yields_schema_json_error() {
    let server = compliant_engine().await;
    let app = test_app(&server.uri());

    let response = app
        .oneshot(multipart_request("broken.json", b"{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report: ValidationReport = body_json(response).await;
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].rule.as_deref(), Some("schema.json"));
    assert_eq!(report.duration_ms, 0.0);
}

#[tokio::test]
async fn uploaded_aasx_goes_to_the_package_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "supported": ["3.0"],
            "latest": "3.0",
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/check/package"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "compliant": true,
            "dump": "package ok",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let response = app
        .oneshot(multipart_request("twin.aasx", b"PK\x03\x04fake-package"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report: ValidationReport = body_json(response).await;
    assert!(report.valid);
}

#[tokio::test]
async fn unsupported_extension_is_rejected() {
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(multipart_request("notes.txt", b"hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let app = test_app("http://127.0.0.1:1");
    let boundary = "aasv-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/validate/file")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn openapi_spec_is_served() {
    let app = test_app("http://127.0.0.1:1");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = body_json(response).await;
    assert!(body["paths"]["/validate/json"].is_object());
}
