use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use arcade_shared::models::leaderboard::{LeaderboardEntry, SubmitScoreRequest};
use arcade_shared::models::record::{to_responses, CreatedResponse, RecordResponse};

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/leaderboard/{game_id}",
        get(get_leaderboard).post(submit_score),
    )
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

async fn get_leaderboard(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<RecordResponse<LeaderboardEntry>>>, ApiError> {
    state
        .services()?
        .leaderboard_service
        .get_leaderboard(&game_id, query.limit)
        .await
        .map(|entries| Json(to_responses(entries)))
        .map_err(|e| {
            error!("Failed to load leaderboard for game {}: {}", game_id, e);
            ApiError::from(e)
        })
}

async fn submit_score(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    state
        .services()?
        .leaderboard_service
        .submit_score(&game_id, payload)
        .await
        .map(|id| Json(CreatedResponse::new(&id)))
        .map_err(|e| {
            error!("Failed to submit score for game {}: {}", game_id, e);
            ApiError::from(e)
        })
}
