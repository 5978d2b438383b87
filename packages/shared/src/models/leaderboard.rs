use serde::{Deserialize, Serialize};

/// A submitted score, stored in the `leaderboardentry` collection.
///
/// `game_id` and `user_id` are plain strings and are never checked against
/// the game or user collections. `username` is a snapshot taken at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub game_id: String,
    pub user_id: String,
    pub username: String,
    pub score: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmitScoreRequest {
    pub user_id: String,
    pub username: String,
    pub score: i64,
}

impl SubmitScoreRequest {
    pub fn into_entry(self, game_id: &str) -> LeaderboardEntry {
        LeaderboardEntry {
            game_id: game_id.to_string(),
            user_id: self.user_id,
            username: self.username,
            score: self.score,
        }
    }
}

pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;
