use axum::{extract::State, http::StatusCode, Json};
use portier_core::domain::KeyCopy;
use portier_core::Page;

use crate::dto::{CreateCopyRequest, UpdateCopyRequest};
use crate::extract::{IdPath, ListQuery, ValidatedJson};
use crate::response::ApiError;
use crate::state::AppState;

pub async fn list_copies(
    State(state): State<AppState>,
    query: ListQuery,
) -> Result<Json<Page<KeyCopy>>, ApiError> {
    Ok(Json(state.copies.list(query.page).await?))
}

pub async fn get_copy(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<KeyCopy>, ApiError> {
    Ok(Json(state.copies.get(id).await?))
}

pub async fn create_copy(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateCopyRequest>,
) -> Result<(StatusCode, Json<KeyCopy>), ApiError> {
    let copy = state.copies.create(body.name, body.key_id).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

pub async fn update_copy(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateCopyRequest>,
) -> Result<Json<KeyCopy>, ApiError> {
    Ok(Json(state.copies.update(id, body.name).await?))
}

pub async fn delete_copy(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.copies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
