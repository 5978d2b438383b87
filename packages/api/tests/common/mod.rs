//! In-memory stand-ins for the document store and helpers for driving the
//! router in tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

use arcade_api::create_app;
use arcade_api::state::{AppState, Services};
use arcade_shared::bson::oid::ObjectId;
use arcade_shared::models::game::{Game, GameCategory};
use arcade_shared::models::leaderboard::LeaderboardEntry;
use arcade_shared::models::record::Record;
use arcade_shared::models::user::User;
use arcade_shared::repositories::errors::repository_errors::RepositoryError;
use arcade_shared::repositories::game_repository::GameRepository;
use arcade_shared::repositories::leaderboard_repository::LeaderboardRepository;
use arcade_shared::repositories::store::StoreCatalog;
use arcade_shared::repositories::user_repository::UserRepository;
use arcade_shared::services::diagnostics_service::DiagnosticsService;
use arcade_shared::services::game_service::GameService;
use arcade_shared::services::leaderboard_service::LeaderboardService;
use arcade_shared::services::user_service::UserService;

#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    pub games: Arc<RwLock<Vec<Record<Game>>>>,
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn list_games(
        &self,
        category: Option<GameCategory>,
    ) -> Result<Vec<Record<Game>>, RepositoryError> {
        let games = self.games.read().await;
        Ok(games
            .iter()
            .filter(|game| category.map_or(true, |c| game.fields.category == c))
            .cloned()
            .collect())
    }

    async fn insert_game(&self, game: &Game) -> Result<ObjectId, RepositoryError> {
        let id = ObjectId::new();
        self.games.write().await.push(Record::new(id, game.clone()));
        Ok(id)
    }

    async fn insert_games(&self, games: &[Game]) -> Result<Vec<ObjectId>, RepositoryError> {
        let mut ids = Vec::with_capacity(games.len());
        for game in games {
            ids.push(self.insert_game(game).await?);
        }
        Ok(ids)
    }

    async fn count_games(&self) -> Result<u64, RepositoryError> {
        Ok(self.games.read().await.len() as u64)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    pub users: Arc<RwLock<HashMap<ObjectId, User>>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Record<User>>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|(_, user)| user.username == username)
            .map(|(id, user)| Record::new(*id, user.clone())))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Record<User>>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(id).map(|user| Record::new(*id, user.clone())))
    }

    async fn insert_user(&self, user: &User) -> Result<ObjectId, RepositoryError> {
        let id = ObjectId::new();
        self.users.write().await.insert(id, user.clone());
        Ok(id)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryLeaderboardRepository {
    pub entries: Arc<RwLock<Vec<Record<LeaderboardEntry>>>>,
}

#[async_trait]
impl LeaderboardRepository for InMemoryLeaderboardRepository {
    async fn insert_entry(&self, entry: &LeaderboardEntry) -> Result<ObjectId, RepositoryError> {
        let id = ObjectId::new();
        self.entries.write().await.push(Record::new(id, entry.clone()));
        Ok(id)
    }

    async fn top_entries(
        &self,
        game_id: &str,
        limit: u32,
    ) -> Result<Vec<Record<LeaderboardEntry>>, RepositoryError> {
        let entries = self.entries.read().await;
        let mut matching: Vec<_> = entries
            .iter()
            .filter(|entry| entry.fields.game_id == game_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.fields.score.cmp(&a.fields.score));
        matching.truncate(limit as usize);
        Ok(matching)
    }
}

pub struct InMemoryCatalog {
    pub result: Result<Vec<String>, RepositoryError>,
}

#[async_trait]
impl StoreCatalog for InMemoryCatalog {
    async fn list_collection_names(&self) -> Result<Vec<String>, RepositoryError> {
        self.result.clone()
    }
}

/// A router over in-memory repositories, with handles to inspect what the
/// routes stored.
pub struct TestApp {
    pub router: Router,
    pub games: InMemoryGameRepository,
    pub users: InMemoryUserRepository,
    pub leaderboard: InMemoryLeaderboardRepository,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_catalog(InMemoryCatalog {
            result: Ok(vec![
                "game".to_string(),
                "user".to_string(),
                "leaderboardentry".to_string(),
            ]),
        })
    }

    pub fn with_catalog(catalog: InMemoryCatalog) -> Self {
        let games = InMemoryGameRepository::default();
        let users = InMemoryUserRepository::default();
        let leaderboard = InMemoryLeaderboardRepository::default();

        let services = Services {
            game_service: Arc::new(GameService::new(Arc::new(games.clone()))),
            user_service: Arc::new(UserService::new(Arc::new(users.clone()))),
            leaderboard_service: Arc::new(LeaderboardService::new(Arc::new(leaderboard.clone()))),
        };
        let diagnostics = DiagnosticsService::new(
            Some(Arc::new(catalog)),
            true,
            Some("arcade".to_string()),
        );

        TestApp {
            router: create_app(AppState::new(Some(services), Arc::new(diagnostics))),
            games,
            users,
            leaderboard,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.router, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.router, json_request(uri, body)).await
    }
}

/// A router whose store was never initialised.
pub fn app_without_store() -> Router {
    let diagnostics = DiagnosticsService::new(None, false, None);
    create_app(AppState::new(None, Arc::new(diagnostics)))
}

pub fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::String(
            String::from_utf8_lossy(&body).into_owned(),
        ))
    };
    (status, value)
}
