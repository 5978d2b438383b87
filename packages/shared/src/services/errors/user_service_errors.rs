use crate::models::identifier::InvalidIdError;
use crate::repositories::errors::repository_errors::RepositoryError;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("{0}")]
    InvalidIdentifier(#[from] InvalidIdError),
    #[error("User not found")]
    UserNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}
