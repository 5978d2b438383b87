use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use arcade_shared::services::errors::{
    game_service_errors::GameServiceError, leaderboard_service_errors::LeaderboardServiceError,
    user_service_errors::UserServiceError,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    StoreUnavailable,
    GameService(GameServiceError),
    UserService(UserServiceError),
    LeaderboardService(LeaderboardServiceError),
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<UserServiceError> for ApiError {
    fn from(error: UserServiceError) -> Self {
        ApiError::UserService(error)
    }
}

impl From<LeaderboardServiceError> for ApiError {
    fn from(error: LeaderboardServiceError) -> Self {
        ApiError::LeaderboardService(error)
    }
}

const INTERNAL_ERROR: &str = "Internal server error";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::StoreUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database not configured".to_string(),
            ),

            ApiError::GameService(GameServiceError::ValidationError(e)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }

            ApiError::UserService(UserServiceError::ValidationError(e)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::UserService(UserServiceError::InvalidIdentifier(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::UserService(UserServiceError::UserNotFound) => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            ApiError::UserService(UserServiceError::RepositoryError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }

            ApiError::LeaderboardService(LeaderboardServiceError::InvalidScore(_)) => (
                StatusCode::BAD_REQUEST,
                "Score must be non-negative".to_string(),
            ),
            ApiError::LeaderboardService(LeaderboardServiceError::ValidationError(e)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::LeaderboardService(LeaderboardServiceError::RepositoryError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
