pub mod diagnostics;
pub mod games;
pub mod health;
pub mod leaderboard;
pub mod users;
