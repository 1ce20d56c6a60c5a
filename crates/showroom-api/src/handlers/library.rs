//! Library handlers.

use axum::Json;
use axum::extract::State;

use showroom_core::types::LibraryId;
use showroom_entity::library::Library;
use showroom_entity::project::Project;

use crate::dto::{ApiResponse, ProjectCountResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath};
use crate::state::AppState;

/// PATCH /api/libraries/{library_id}/project-count
pub async fn recount_projects(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(library_id): IdPath<LibraryId>,
) -> Result<Json<ApiResponse<ProjectCountResponse>>, ApiError> {
    let project_count = state
        .services
        .libraries
        .recount_projects(library_id)
        .await?;
    Ok(Json(ApiResponse::ok(ProjectCountResponse { project_count })))
}

/// GET /api/libraries/{library_id}/projects
pub async fn list_projects(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(library_id): IdPath<LibraryId>,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    let projects = state
        .services
        .projects
        .list_library_projects(library_id)
        .await?;
    Ok(Json(ApiResponse::ok(projects)))
}

/// DELETE /api/libraries/{library_id}
pub async fn delete_library(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(library_id): IdPath<LibraryId>,
) -> Result<Json<ApiResponse<Library>>, ApiError> {
    let library = state
        .services
        .libraries
        .delete_library(&auth, library_id)
        .await?;
    Ok(Json(ApiResponse::ok(library)))
}
