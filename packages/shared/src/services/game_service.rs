use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use tracing::{debug, info};

use crate::models::game::{CreateGameRequest, Game, GameCategory};
use crate::models::record::Record;
use crate::repositories::game_repository::GameRepository;
use crate::services::errors::game_service_errors::GameServiceError;
use crate::validation::Validate;

#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Inserted(Vec<ObjectId>),
    AlreadySeeded,
}

pub struct GameService {
    repository: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        GameService { repository }
    }

    /// Lists every game, or only those in `category` when one is given. A
    /// category outside the known set cannot match any stored game.
    pub async fn list_games(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Record<Game>>, GameServiceError> {
        let category = match category {
            Some(raw) => match raw.parse::<GameCategory>() {
                Ok(category) => Some(category),
                Err(_) => {
                    debug!("Unknown category filter {:?}, returning no games", raw);
                    return Ok(Vec::new());
                }
            },
            None => None,
        };
        Ok(self.repository.list_games(category).await?)
    }

    pub async fn create_game(
        &self,
        request: CreateGameRequest,
    ) -> Result<ObjectId, GameServiceError> {
        let game = request.validate()?;
        let id = self.repository.insert_game(&game).await?;
        info!("Created game {} ({})", id, game.title);
        Ok(id)
    }

    /// Inserts the sample catalogue, but only into an empty collection.
    pub async fn seed_games(&self) -> Result<SeedOutcome, GameServiceError> {
        if self.repository.count_games().await? > 0 {
            debug!("Games collection is not empty, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded);
        }
        let ids = self.repository.insert_games(&sample_games()).await?;
        info!("Seeded {} games", ids.len());
        Ok(SeedOutcome::Inserted(ids))
    }
}

pub fn sample_games() -> Vec<Game> {
    vec![
        Game::new(
            "Neon Blocks",
            "Stack and align glowing blocks in this chill puzzle.",
            GameCategory::Puzzle,
        ),
        Game::new(
            "Cyber Runner",
            "Dash through a synth city, dodge obstacles, collect cores.",
            GameCategory::Adventure,
        ),
        Game::new(
            "Pulse Shooter",
            "Arcade action with rhythmic enemy waves and power-ups.",
            GameCategory::Action,
        ),
        Game::new(
            "ABC Quest",
            "Learn letters and sounds with friendly characters.",
            GameCategory::KidsLearning,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::errors::repository_errors::RepositoryError;
    use crate::repositories::game_repository::MockGameRepository;

    fn neon_blocks_request() -> CreateGameRequest {
        CreateGameRequest {
            title: "Neon Blocks".to_string(),
            description: "Stack and align glowing blocks in this chill puzzle.".to_string(),
            category: "Puzzle".to_string(),
            thumbnail: None,
            plays: 0,
        }
    }

    #[test]
    fn test_sample_games_pass_validation() {
        let games = sample_games();
        assert_eq!(games.len(), 4);
        for game in games {
            let request = CreateGameRequest {
                title: game.title.clone(),
                description: game.description.clone(),
                category: game.category.to_string(),
                thumbnail: None,
                plays: 0,
            };
            assert_eq!(request.validate().unwrap(), game);
        }
    }

    #[tokio::test]
    async fn test_list_games_passes_category_filter() {
        let mut repo = MockGameRepository::new();
        repo.expect_list_games()
            .withf(|category| *category == Some(GameCategory::KidsLearning))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = GameService::new(Arc::new(repo));
        let games = service.list_games(Some("Kids Learning")).await.unwrap();

        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn test_list_games_with_unknown_category_skips_store() {
        let mut repo = MockGameRepository::new();
        repo.expect_list_games().never();

        let service = GameService::new(Arc::new(repo));
        let games = service.list_games(Some("Racing")).await.unwrap();

        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn test_create_game_inserts_validated_game() {
        let id = ObjectId::new();
        let mut repo = MockGameRepository::new();
        repo.expect_insert_game()
            .withf(|game| game.title == "Neon Blocks" && game.category == GameCategory::Puzzle)
            .times(1)
            .returning(move |_| Ok(id));

        let service = GameService::new(Arc::new(repo));

        assert_eq!(service.create_game(neon_blocks_request()).await.unwrap(), id);
    }

    #[tokio::test]
    async fn test_create_game_rejects_invalid_body_before_insert() {
        let mut repo = MockGameRepository::new();
        repo.expect_insert_game().never();

        let service = GameService::new(Arc::new(repo));
        let mut request = neon_blocks_request();
        request.category = "Racing".to_string();

        let err = service.create_game(request).await.unwrap_err();
        assert!(matches!(err, GameServiceError::ValidationError(e) if e.field == "category"));
    }

    #[tokio::test]
    async fn test_seed_inserts_samples_into_empty_collection() {
        let mut repo = MockGameRepository::new();
        repo.expect_count_games().times(1).returning(|| Ok(0));
        repo.expect_insert_games()
            .withf(|games| games.len() == 4)
            .times(1)
            .returning(|games| Ok(games.iter().map(|_| ObjectId::new()).collect()));

        let service = GameService::new(Arc::new(repo));

        match service.seed_games().await.unwrap() {
            SeedOutcome::Inserted(ids) => assert_eq!(ids.len(), 4),
            other => panic!("expected inserted ids, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_collection() {
        let mut repo = MockGameRepository::new();
        repo.expect_count_games().times(1).returning(|| Ok(4));
        repo.expect_insert_games().never();

        let service = GameService::new(Arc::new(repo));

        assert_eq!(service.seed_games().await.unwrap(), SeedOutcome::AlreadySeeded);
    }

    #[tokio::test]
    async fn test_seed_propagates_store_errors() {
        let mut repo = MockGameRepository::new();
        repo.expect_count_games()
            .returning(|| Err(RepositoryError::Database("connection refused".to_string())));

        let service = GameService::new(Arc::new(repo));

        assert!(matches!(
            service.seed_games().await,
            Err(GameServiceError::RepositoryError(_))
        ));
    }
}
