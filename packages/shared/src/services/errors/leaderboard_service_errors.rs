use crate::repositories::errors::repository_errors::RepositoryError;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum LeaderboardServiceError {
    #[error("Score must be non-negative, got {0}")]
    InvalidScore(i64),
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}
