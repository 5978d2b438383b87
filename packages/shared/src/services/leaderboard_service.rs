use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use tracing::info;

use crate::models::leaderboard::{
    LeaderboardEntry, SubmitScoreRequest, DEFAULT_LEADERBOARD_LIMIT,
};
use crate::models::record::Record;
use crate::repositories::leaderboard_repository::LeaderboardRepository;
use crate::services::errors::leaderboard_service_errors::LeaderboardServiceError;
use crate::validation::check_non_negative;

pub struct LeaderboardService {
    repository: Arc<dyn LeaderboardRepository>,
}

impl LeaderboardService {
    pub fn new(repository: Arc<dyn LeaderboardRepository>) -> Self {
        LeaderboardService { repository }
    }

    pub async fn get_leaderboard(
        &self,
        game_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Record<LeaderboardEntry>>, LeaderboardServiceError> {
        let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
        check_non_negative("limit", limit)?;
        let limit = u32::try_from(limit).unwrap_or(u32::MAX);

        Ok(self.repository.top_entries(game_id, limit).await?)
    }

    /// Records a score for `game_id`. Neither the game nor the user id is
    /// checked for existence.
    pub async fn submit_score(
        &self,
        game_id: &str,
        request: SubmitScoreRequest,
    ) -> Result<ObjectId, LeaderboardServiceError> {
        if request.score < 0 {
            return Err(LeaderboardServiceError::InvalidScore(request.score));
        }
        let entry = request.into_entry(game_id);
        let id = self.repository.insert_entry(&entry).await?;
        info!(
            "Recorded score {} for {} on game {}",
            entry.score, entry.username, entry.game_id
        );
        Ok(id)
    }
}
