//! Project handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use showroom_core::types::ProjectId;
use showroom_entity::project::Project;

use crate::dto::{ApiResponse, CreateProjectRequest};
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidJson};
use crate::state::AppState;

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    let project = state.services.projects.create_project(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(project))))
}

/// DELETE /api/projects/{project_id}
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(project_id): IdPath<ProjectId>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state
        .services
        .projects
        .delete_project(&auth, project_id)
        .await?;
    Ok(Json(ApiResponse::ok(project)))
}
