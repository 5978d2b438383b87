use std::collections::HashMap;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson};
use mongodb::Collection;

use crate::models::game::{Game, GameCategory};
use crate::models::record::Record;
use crate::repositories::errors::repository_errors::RepositoryError;
use crate::repositories::store::{inserted_object_id, MongoStore, GAME_COLLECTION};

#[cfg(test)]
use mockall::automock;

pub struct MongoGameRepository {
    collection: Collection<Game>,
}

impl MongoGameRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.database().collection(GAME_COLLECTION),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn list_games(
        &self,
        category: Option<GameCategory>,
    ) -> Result<Vec<Record<Game>>, RepositoryError>;
    async fn insert_game(&self, game: &Game) -> Result<ObjectId, RepositoryError>;
    async fn insert_games(&self, games: &[Game]) -> Result<Vec<ObjectId>, RepositoryError>;
    async fn count_games(&self) -> Result<u64, RepositoryError>;
}

#[async_trait]
impl GameRepository for MongoGameRepository {
    async fn list_games(
        &self,
        category: Option<GameCategory>,
    ) -> Result<Vec<Record<Game>>, RepositoryError> {
        let filter = match category {
            Some(category) => doc! { "category": category.as_str() },
            None => doc! {},
        };
        let cursor = self
            .collection
            .clone_with_type::<Record<Game>>()
            .find(filter)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    async fn insert_game(&self, game: &Game) -> Result<ObjectId, RepositoryError> {
        let result = self
            .collection
            .insert_one(game)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        inserted_object_id(&result.inserted_id)
    }

    async fn insert_games(&self, games: &[Game]) -> Result<Vec<ObjectId>, RepositoryError> {
        if games.is_empty() {
            return Ok(Vec::new());
        }
        let result = self
            .collection
            .insert_many(games)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        ids_in_batch_order(result.inserted_ids)
    }

    async fn count_games(&self) -> Result<u64, RepositoryError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }
}

/// `insert_many` reports ids keyed by each document's position in the batch.
fn ids_in_batch_order(
    inserted_ids: HashMap<usize, Bson>,
) -> Result<Vec<ObjectId>, RepositoryError> {
    let mut ids: Vec<_> = inserted_ids.into_iter().collect();
    ids.sort_by_key(|(index, _)| *index);
    ids.iter().map(|(_, id)| inserted_object_id(id)).collect()
}
