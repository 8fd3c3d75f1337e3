use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::response::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// 200 once the database answers, 503 otherwise.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .map_err(|e| ApiError::ServiceUnavailable(format!("database not reachable: {}", e)))?;

    Ok(StatusCode::OK)
}
