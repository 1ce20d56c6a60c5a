//! Company handlers.

use axum::Json;
use axum::extract::State;

use showroom_core::types::CompanyId;
use showroom_entity::company::{CompanyStats, CompanyWithStats};

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath};
use crate::state::AppState;

/// GET /api/companies/{company_id}
pub async fn get_company(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(company_id): IdPath<CompanyId>,
) -> Result<Json<ApiResponse<CompanyWithStats>>, ApiError> {
    let company = state.services.companies.get_company(company_id).await?;
    Ok(Json(ApiResponse::ok(company)))
}

/// GET /api/companies/{company_id}/statistics
pub async fn statistics(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(company_id): IdPath<CompanyId>,
) -> Result<Json<ApiResponse<CompanyStats>>, ApiError> {
    let stats = state.services.companies.statistics(company_id).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
