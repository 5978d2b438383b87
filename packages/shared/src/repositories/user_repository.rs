use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::models::record::Record;
use crate::models::user::User;
use crate::repositories::errors::repository_errors::RepositoryError;
use crate::repositories::store::{inserted_object_id, MongoStore, USER_COLLECTION};

#[cfg(test)]
use mockall::automock;

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.database().collection(USER_COLLECTION),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Record<User>>, RepositoryError>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Record<User>>, RepositoryError>;
    async fn insert_user(&self, user: &User) -> Result<ObjectId, RepositoryError>;
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Record<User>>, RepositoryError> {
        self.collection
            .clone_with_type::<Record<User>>()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Record<User>>, RepositoryError> {
        self.collection
            .clone_with_type::<Record<User>>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn insert_user(&self, user: &User) -> Result<ObjectId, RepositoryError> {
        let result = self
            .collection
            .insert_one(user)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        inserted_object_id(&result.inserted_id)
    }
}
