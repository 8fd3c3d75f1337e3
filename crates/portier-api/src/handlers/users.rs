use axum::{extract::State, http::StatusCode, Json};
use portier_core::Page;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::extract::{IdPath, ListQuery, ValidatedJson};
use crate::response::ApiError;
use crate::state::AppState;

/// GET /users?name=&id_number=
pub async fn list_users(
    State(state): State<AppState>,
    query: ListQuery,
) -> Result<Json<Page<UserResponse>>, ApiError> {
    let page = state.users.list(query.page, query.filter).await?;
    Ok(Json(page.map(UserResponse::from)))
}

pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.users.get(id).await?.into()))
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.users.create(body.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.update(id, body.into_input()?).await?;
    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
