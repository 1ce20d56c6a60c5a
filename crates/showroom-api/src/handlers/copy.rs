//! Share code issuance and redemption handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use showroom_core::types::LibraryId;
use showroom_entity::library::Library;
use showroom_entity::share_code::ShareCode;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath};
use crate::state::AppState;

/// POST /api/copies/libraries/{library_id}
pub async fn issue_code(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(library_id): IdPath<LibraryId>,
) -> Result<(StatusCode, Json<ApiResponse<ShareCode>>), ApiError> {
    let code = state
        .services
        .share_codes
        .issue_code(&auth, library_id)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(code))))
}

/// POST /api/copies/redeem/{code}
pub async fn redeem_code(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Library>>, ApiError> {
    let library = state.services.copies.redeem_code(&auth, &code).await?;
    Ok(Json(ApiResponse::ok(library)))
}
