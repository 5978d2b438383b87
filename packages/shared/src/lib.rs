pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;

pub use mongodb::bson;
