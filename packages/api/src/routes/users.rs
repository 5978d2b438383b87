use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, error};

use arcade_shared::models::record::RecordResponse;
use arcade_shared::models::user::{CreateUserRequest, User};

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/{user_id}", get(get_user))
}

/// Idempotent on `username`: an existing user is returned as is.
async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<RecordResponse<User>>, ApiError> {
    let username = payload.username.clone();
    state
        .services()?
        .user_service
        .create_or_get_user(payload)
        .await
        .map(|user| Json(user.into()))
        .map_err(|e| {
            error!("Failed to create user {}: {}", username, e);
            ApiError::from(e)
        })
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<RecordResponse<User>>, ApiError> {
    let user = state
        .services()?
        .user_service
        .get_user_by_id(&user_id)
        .await
        .map_err(|e| {
            debug!("Failed to retrieve user {}: {}", user_id, e);
            ApiError::from(e)
        })?;
    Ok(Json(user.into()))
}
