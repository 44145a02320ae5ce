//! # aasv-api — Axum API Service for the AAS Validation Stack
//!
//! REST surface over the deep validation engine. Validation itself lives
//! in `aasv-engine`; this crate is transport only: request/response
//! shaping, file upload handling, configuration, CORS, and health probes.
//!
//! ## API Surface
//!
//! | Route                   | Module               | Purpose                       |
//! |-------------------------|----------------------|-------------------------------|
//! | `POST /validate/json`   | [`routes::validate`] | Deep environment validation   |
//! | `POST /validate/file`   | [`routes::validate`] | Uploaded `.aasx`/`.json` file |
//! | `POST /validate/schema` | [`routes::validate`] | Schema-only quick check       |
//! | `GET /validate/rules`   | [`routes::validate`] | Rule catalog                  |
//! | `GET /health`           | [`routes::health`]   | Liveness probe                |
//! | `GET /ready`            | [`routes::health`]   | Readiness (engine reachable)  |
//! | `GET /openapi.json`     | [`openapi`]          | OpenAPI 3.1 spec              |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → DefaultBodyLimit → Handler
//! ```
//!
//! ## Crate Policy
//!
//! - No validation logic in route handlers — delegates to `aasv-engine`.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// The body limit guards the upload path against oversized requests; the
/// limit is configurable because AASX packages routinely run tens of
/// megabytes.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let body_limit = state.config.body_limit_bytes();

    Router::new()
        .merge(routes::health::router())
        .merge(routes::validate::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer from the configured origin list. A `*` entry allows any
/// origin; otherwise only origins that parse as header values are kept.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
