//! HTTP adapter for the register.
//!
//! Maps routes onto register operations and serializes both envelopes. It holds
//! no logic of its own: decode, call, write.
//!
//! Routes (all under `/v1`):
//! - `POST /organisations` -- `createOrganisation` (201)
//! - `GET /organisations` -- `listOrganisations`
//! - `GET /publishers` -- `listPublishers`
//! - `POST /repositories` -- `createRepository` (201)
//! - `GET /repositories` -- `listRepositories`
//! - `GET /repositories/{id}` -- `getRepositoryById`
//! - `POST /gitOrganisations` -- `createGitOrganisation` (201)
//! - `GET /gitOrganisations` -- `listGitOrganisations`
//! - `GET /openapi.json` -- the OpenAPI document, served from disk

pub mod handlers;

use crate::framework::Rejection;
use crate::lifecycle::Register;
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Json, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Header carrying the API version on every successful response.
pub const API_VERSION: HeaderName = HeaderName::from_static("api-version");

/// Response headers browsers may read cross-origin. The pagination headers are
/// part of the published API even though nothing here sets them yet.
pub const EXPOSED_HEADERS: [HeaderName; 6] = [
    API_VERSION,
    HeaderName::from_static("link"),
    HeaderName::from_static("total-count"),
    HeaderName::from_static("total-pages"),
    HeaderName::from_static("per-page"),
    HeaderName::from_static("current-page"),
];

/// Shared state handed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub register: Arc<Register>,
    /// Location of the OpenAPI document served at `/v1/openapi.json`.
    pub openapi: Arc<PathBuf>,
}

/// Assembles the router with all register routes and middleware.
pub fn build_router(register: Arc<Register>, api_version: HeaderValue, openapi: PathBuf) -> Router {
    let state = AppState {
        register,
        openapi: Arc::new(openapi),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(EXPOSED_HEADERS);

    Router::new()
        .route(
            "/v1/organisations",
            get(handlers::list_organisations).post(handlers::create_organisation),
        )
        .route("/v1/publishers", get(handlers::list_publishers))
        .route(
            "/v1/repositories",
            get(handlers::list_repositories).post(handlers::create_repository),
        )
        .route("/v1/repositories/{id}", get(handlers::get_repository_by_id))
        .route(
            "/v1/gitOrganisations",
            get(handlers::list_git_organisations).post(handlers::create_git_organisation),
        )
        .route("/v1/openapi.json", get(handlers::openapi_document))
        .layer(middleware::map_response(move |response: Response| {
            stamp_api_version(response, api_version.clone())
        }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn stamp_api_version(mut response: Response, api_version: HeaderValue) -> Response {
    if response.status().is_success() {
        response.headers_mut().insert(API_VERSION, api_version);
    }
    response
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        // Statuses outside the HTTP range cannot be written on the wire.
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_REQUEST);
        (status, Json(self)).into_response()
    }
}
