use std::sync::Arc;

use arcade_shared::repositories::game_repository::MongoGameRepository;
use arcade_shared::repositories::leaderboard_repository::MongoLeaderboardRepository;
use arcade_shared::repositories::store::{MongoStore, StoreCatalog};
use arcade_shared::repositories::user_repository::MongoUserRepository;
use arcade_shared::services::diagnostics_service::DiagnosticsService;
use arcade_shared::services::game_service::GameService;
use arcade_shared::services::leaderboard_service::LeaderboardService;
use arcade_shared::services::user_service::UserService;
use tracing::{error, warn};

use crate::config::AppConfig;
use crate::error::ApiError;

/// Services that need the document store.
#[derive(Clone)]
pub struct Services {
    pub game_service: Arc<GameService>,
    pub user_service: Arc<UserService>,
    pub leaderboard_service: Arc<LeaderboardService>,
}

impl Services {
    pub fn from_store(store: &MongoStore) -> Self {
        Services {
            game_service: Arc::new(GameService::new(Arc::new(MongoGameRepository::new(store)))),
            user_service: Arc::new(UserService::new(Arc::new(MongoUserRepository::new(store)))),
            leaderboard_service: Arc::new(LeaderboardService::new(Arc::new(
                MongoLeaderboardRepository::new(store),
            ))),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    services: Option<Services>,
    pub diagnostics_service: Arc<DiagnosticsService>,
}

impl AppState {
    pub fn new(services: Option<Services>, diagnostics_service: Arc<DiagnosticsService>) -> Self {
        AppState {
            services,
            diagnostics_service,
        }
    }

    pub fn from_store(store: Option<MongoStore>, config: &AppConfig) -> Self {
        let services = store.as_ref().map(Services::from_store);
        let catalog = store.map(|store| Arc::new(store) as Arc<dyn StoreCatalog>);
        let diagnostics_service = Arc::new(DiagnosticsService::new(
            catalog,
            config.database_url.is_some(),
            config.database_name.clone(),
        ));
        AppState::new(services, diagnostics_service)
    }

    /// Fails with [`ApiError::StoreUnavailable`] when the store was never set up.
    pub fn services(&self) -> Result<&Services, ApiError> {
        self.services.as_ref().ok_or(ApiError::StoreUnavailable)
    }
}

/// Opens the store from the configured connection string. Any failure leaves
/// the store absent; the server still starts and data routes answer 500.
pub async fn connect_store(config: &AppConfig) -> Option<MongoStore> {
    let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
        warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return None;
    };
    match MongoStore::connect(url, name).await {
        Ok(store) => Some(store),
        Err(e) => {
            error!("Failed to initialise database client: {}", e);
            None
        }
    }
}
