pub mod errors;
pub mod game_repository;
pub mod leaderboard_repository;
pub mod store;
pub mod user_repository;
