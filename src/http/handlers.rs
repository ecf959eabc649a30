//! One handler per register operation.
//!
//! Decoding failures are reported with the same `{ message, detail }` body as
//! operation rejections so clients only ever see one error shape.

use super::AppState;
use crate::framework::Rejection;
use crate::model::{
    CreateGitOrganisationParams, CreateOrganisationParams, CreateRepositoryParams, GetRepositoryParams,
    GitOrganisationInput, ListGitOrganisationsParams, ListOrganisationsParams, ListPublishersParams,
    ListRepositoriesParams, OrganisationSummary, PostRepository,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::warn;

type Envelope = Result<Json<Value>, Rejection>;
type Created = Result<(StatusCode, Json<Value>), Rejection>;

/// `POST /v1/organisations`
pub async fn create_organisation(
    State(state): State<AppState>,
    body: Result<Json<OrganisationSummary>, JsonRejection>,
) -> Created {
    let Json(organisation_summary) = body.map_err(json_rejection)?;
    let envelope = state
        .register
        .organisations
        .create_organisation(CreateOrganisationParams { organisation_summary })
        .await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// `GET /v1/organisations`
pub async fn list_organisations(State(state): State<AppState>) -> Envelope {
    let envelope = state
        .register
        .organisations
        .list_organisations(ListOrganisationsParams::default())
        .await?;
    Ok(Json(envelope))
}

/// `GET /v1/publishers`
pub async fn list_publishers(State(state): State<AppState>) -> Envelope {
    let envelope = state
        .register
        .publishers
        .list_publishers(ListPublishersParams::default())
        .await?;
    Ok(Json(envelope))
}

/// `POST /v1/repositories`
pub async fn create_repository(
    State(state): State<AppState>,
    body: Result<Json<PostRepository>, JsonRejection>,
) -> Created {
    let Json(post_repository) = body.map_err(json_rejection)?;
    let envelope = state
        .register
        .repositories
        .create_repository(CreateRepositoryParams { post_repository })
        .await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// `GET /v1/repositories/{id}`
pub async fn get_repository_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Envelope {
    let envelope = state
        .register
        .repositories
        .get_repository_by_id(GetRepositoryParams { id })
        .await?;
    Ok(Json(envelope))
}

/// `GET /v1/repositories`
pub async fn list_repositories(
    State(state): State<AppState>,
    query: Result<Query<ListRepositoriesParams>, QueryRejection>,
) -> Envelope {
    let Query(params) = query.map_err(query_rejection)?;
    let envelope = state.register.repositories.list_repositories(params).await?;
    Ok(Json(envelope))
}

/// `POST /v1/gitOrganisations`
pub async fn create_git_organisation(
    State(state): State<AppState>,
    body: Result<Json<GitOrganisationInput>, JsonRejection>,
) -> Created {
    let Json(git_organisation_input) = body.map_err(json_rejection)?;
    let envelope = state
        .register
        .git_organisations
        .create_git_organisation(CreateGitOrganisationParams { git_organisation_input })
        .await?;
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// `GET /v1/gitOrganisations`
pub async fn list_git_organisations(
    State(state): State<AppState>,
    query: Result<Query<ListGitOrganisationsParams>, QueryRejection>,
) -> Envelope {
    let Query(params) = query.map_err(query_rejection)?;
    let envelope = state.register.git_organisations.list_git_organisations(params).await?;
    Ok(Json(envelope))
}

/// `GET /v1/openapi.json`
pub async fn openapi_document(State(state): State<AppState>) -> Result<Response, Rejection> {
    match tokio::fs::read(state.openapi.as_path()).await {
        Ok(document) => Ok(([(header::CONTENT_TYPE, "application/json")], document).into_response()),
        Err(e) => {
            warn!(path = %state.openapi.display(), error = %e, "OpenAPI document unavailable");
            Err(Rejection::new(StatusCode::NOT_FOUND.as_u16(), "Not Found")
                .with_detail("The OpenAPI document is not available"))
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> Rejection {
    Rejection::new(rejection.status().as_u16(), "Invalid request body").with_detail(rejection.body_text())
}

fn query_rejection(rejection: QueryRejection) -> Rejection {
    Rejection::new(rejection.status().as_u16(), "Invalid query parameters").with_detail(rejection.body_text())
}
