use axum::{extract::State, http::StatusCode, Json};
use portier_core::domain::Tenant;
use portier_core::Page;

use crate::dto::{CreateTenantRequest, UpdateTenantRequest};
use crate::extract::{IdPath, ListQuery, ValidatedJson};
use crate::response::ApiError;
use crate::state::AppState;

/// GET /tenants
pub async fn list_tenants(
    State(state): State<AppState>,
    query: ListQuery,
) -> Result<Json<Page<Tenant>>, ApiError> {
    Ok(Json(state.tenants.list(query.page).await?))
}

/// GET /tenants/{id}
pub async fn get_tenant(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Tenant>, ApiError> {
    Ok(Json(state.tenants.get(id).await?))
}

/// POST /tenants
pub async fn create_tenant(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateTenantRequest>,
) -> Result<(StatusCode, Json<Tenant>), ApiError> {
    let tenant = state.tenants.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(tenant)))
}

/// PUT /tenants/{id}
pub async fn update_tenant(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateTenantRequest>,
) -> Result<Json<Tenant>, ApiError> {
    Ok(Json(state.tenants.update(id, body.into()).await?))
}

/// DELETE /tenants/{id}
pub async fn delete_tenant(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.tenants.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
