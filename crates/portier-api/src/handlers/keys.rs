use axum::{extract::State, http::StatusCode, Json};
use portier_core::domain::Key;
use portier_core::Page;

use crate::dto::{CreateKeyRequest, UpdateKeyRequest};
use crate::extract::{IdPath, ListQuery, ValidatedJson};
use crate::response::ApiError;
use crate::state::AppState;

pub async fn list_keys(
    State(state): State<AppState>,
    query: ListQuery,
) -> Result<Json<Page<Key>>, ApiError> {
    Ok(Json(state.keys.list(query.page).await?))
}

pub async fn get_key(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Key>, ApiError> {
    Ok(Json(state.keys.get(id).await?))
}

pub async fn create_key(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateKeyRequest>,
) -> Result<(StatusCode, Json<Key>), ApiError> {
    let key = state.keys.create(body.name).await?;
    Ok((StatusCode::CREATED, Json(key)))
}

pub async fn update_key(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateKeyRequest>,
) -> Result<Json<Key>, ApiError> {
    Ok(Json(state.keys.update(id, body.name).await?))
}

pub async fn delete_key(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.keys.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
