pub mod game;
pub mod identifier;
pub mod leaderboard;
pub mod record;
pub mod user;
