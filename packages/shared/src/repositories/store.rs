use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};
use mongodb::{Client, Database};
use tracing::info;

use crate::repositories::errors::repository_errors::RepositoryError;

#[cfg(test)]
use mockall::automock;

pub const GAME_COLLECTION: &str = "game";
pub const USER_COLLECTION: &str = "user";
pub const LEADERBOARD_COLLECTION: &str = "leaderboardentry";

/// Handle to the document database, created once at startup and shared by
/// every repository.
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Parses the connection string and selects the database. The driver
    /// connects lazily, so an unreachable server only surfaces on first use.
    pub async fn connect(url: &str, database_name: &str) -> Result<Self, RepositoryError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        info!("Using document database {}", database_name);
        Ok(Self {
            database: client.database(database_name),
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

/// Read-only view of the store used for diagnostics.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StoreCatalog: Send + Sync {
    async fn list_collection_names(&self) -> Result<Vec<String>, RepositoryError>;
}

#[async_trait]
impl StoreCatalog for MongoStore {
    async fn list_collection_names(&self) -> Result<Vec<String>, RepositoryError> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }
}

pub(crate) fn inserted_object_id(id: &Bson) -> Result<ObjectId, RepositoryError> {
    id.as_object_id().ok_or_else(|| {
        RepositoryError::Serialization(format!("inserted id {} is not an ObjectId", id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_object_id_accepts_object_ids() {
        let id = ObjectId::new();
        assert_eq!(inserted_object_id(&Bson::ObjectId(id)).unwrap(), id);
    }

    #[test]
    fn test_inserted_object_id_rejects_other_ids() {
        let err = inserted_object_id(&Bson::String("abc".to_string())).unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_connection_string() {
        let err = MongoStore::connect("not-a-connection-string", "arcade")
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
