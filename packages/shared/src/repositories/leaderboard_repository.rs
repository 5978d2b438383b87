use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::models::leaderboard::LeaderboardEntry;
use crate::models::record::Record;
use crate::repositories::errors::repository_errors::RepositoryError;
use crate::repositories::store::{inserted_object_id, MongoStore, LEADERBOARD_COLLECTION};

#[cfg(test)]
use mockall::automock;

pub struct MongoLeaderboardRepository {
    collection: Collection<LeaderboardEntry>,
}

impl MongoLeaderboardRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.database().collection(LEADERBOARD_COLLECTION),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    async fn insert_entry(&self, entry: &LeaderboardEntry) -> Result<ObjectId, RepositoryError>;
    /// Entries for `game_id`, highest score first, at most `limit` of them.
    async fn top_entries(
        &self,
        game_id: &str,
        limit: u32,
    ) -> Result<Vec<Record<LeaderboardEntry>>, RepositoryError>;
}

#[async_trait]
impl LeaderboardRepository for MongoLeaderboardRepository {
    async fn insert_entry(&self, entry: &LeaderboardEntry) -> Result<ObjectId, RepositoryError> {
        let result = self
            .collection
            .insert_one(entry)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        inserted_object_id(&result.inserted_id)
    }

    async fn top_entries(
        &self,
        game_id: &str,
        limit: u32,
    ) -> Result<Vec<Record<LeaderboardEntry>>, RepositoryError> {
        // a limit of 0 means "no limit" to the driver
        if limit == 0 {
            return Ok(Vec::new());
        }
        let cursor = self
            .collection
            .clone_with_type::<Record<LeaderboardEntry>>()
            .find(doc! { "game_id": game_id })
            .sort(doc! { "score": -1 })
            .limit(i64::from(limit))
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::Serialization(e.to_string()))
    }
}
