use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::identifier::parse_id;
use crate::models::record::Record;
use crate::models::user::{CreateUserRequest, User};
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::user_service_errors::UserServiceError;
use crate::validation::Validate;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        UserService { repository }
    }

    /// Returns the user with the requested username, creating it first if it
    /// does not exist yet.
    ///
    /// The lookup and the insert are separate store calls, so two concurrent
    /// requests for a new username can both insert.
    pub async fn create_or_get_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<Record<User>, UserServiceError> {
        if let Some(existing) = self.repository.find_by_username(&request.username).await? {
            debug!("User {} already exists as {}", request.username, existing.id);
            return Ok(existing);
        }

        let user = request.validate()?;
        let id = self.repository.insert_user(&user).await?;
        info!("Created user {} ({})", id, user.username);

        match self.repository.find_by_id(&id).await? {
            Some(created) => Ok(created),
            None => {
                warn!("User {} not readable right after insert", id);
                Ok(Record::new(id, user))
            }
        }
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<Record<User>, UserServiceError> {
        let id = parse_id(user_id)?;
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }
}
