pub mod diagnostics_service;
pub mod errors;
pub mod game_service;
pub mod leaderboard_service;
pub mod user_service;
