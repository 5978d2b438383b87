#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// The underlying driver message, without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            RepositoryError::Database(msg) | RepositoryError::Serialization(msg) => msg,
        }
    }
}
