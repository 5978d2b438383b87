use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use arcade_shared::models::game::{CreateGameRequest, Game};
use arcade_shared::models::identifier::render_id;
use arcade_shared::models::record::{to_responses, CreatedResponse, RecordResponse};
use arcade_shared::services::game_service::SeedOutcome;

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/games", get(list_games).post(create_game))
        .route("/api/seed", post(seed_games))
}

#[derive(Debug, Deserialize)]
pub struct ListGamesQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedResponse {
    Inserted { inserted: Vec<String> },
    AlreadySeeded { status: String, message: String },
}

async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<ListGamesQuery>,
) -> Result<Json<Vec<RecordResponse<Game>>>, ApiError> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let games = state
        .services()?
        .game_service
        .list_games(category)
        .await
        .map_err(|e| {
            error!("Failed to list games: {}", e);
            ApiError::from(e)
        })?;
    debug!("Listed {} games (category: {:?})", games.len(), category);
    Ok(Json(to_responses(games)))
}

async fn create_game(
    State(state): State<AppState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let title = payload.title.clone();
    state
        .services()?
        .game_service
        .create_game(payload)
        .await
        .map(|id| Json(CreatedResponse::new(&id)))
        .map_err(|e| {
            error!("Failed to create game {}: {}", title, e);
            ApiError::from(e)
        })
}

async fn seed_games(State(state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    let outcome = state
        .services()?
        .game_service
        .seed_games()
        .await
        .map_err(|e| {
            error!("Failed to seed games: {}", e);
            ApiError::from(e)
        })?;

    let response = match outcome {
        SeedOutcome::Inserted(ids) => SeedResponse::Inserted {
            inserted: ids.iter().map(render_id).collect(),
        },
        SeedOutcome::AlreadySeeded => SeedResponse::AlreadySeeded {
            status: "ok".to_string(),
            message: "Games already seeded".to_string(),
        },
    };
    Ok(Json(response))
}
