use crate::repositories::errors::repository_errors::RepositoryError;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum GameServiceError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}
