use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{check_length, check_non_negative, check_url, Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameCategory {
    Puzzle,
    Adventure,
    Action,
    #[serde(rename = "Kids Learning")]
    KidsLearning,
}

impl GameCategory {
    pub const ALL: [GameCategory; 4] = [
        GameCategory::Puzzle,
        GameCategory::Adventure,
        GameCategory::Action,
        GameCategory::KidsLearning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCategory::Puzzle => "Puzzle",
            GameCategory::Adventure => "Adventure",
            GameCategory::Action => "Action",
            GameCategory::KidsLearning => "Kids Learning",
        }
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "category",
                    "must be one of 'Puzzle', 'Adventure', 'Action', 'Kids Learning'",
                )
            })
    }
}

/// A game as stored in the `game` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub category: GameCategory,
    pub thumbnail: Option<String>,
    pub plays: i64,
}

impl Game {
    pub fn new(title: &str, description: &str, category: GameCategory) -> Self {
        Game {
            title: title.to_string(),
            description: description.to_string(),
            category,
            thumbnail: None,
            plays: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateGameRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub plays: i64,
}

impl Validate for CreateGameRequest {
    type Output = Game;

    fn validate(self) -> Result<Game, ValidationError> {
        check_length("title", &self.title, 2, 80)?;
        check_length("description", &self.description, 10, 240)?;
        let category = self.category.parse::<GameCategory>()?;
        if let Some(thumbnail) = &self.thumbnail {
            check_url("thumbnail", thumbnail)?;
        }
        check_non_negative("plays", self.plays)?;

        Ok(Game {
            title: self.title,
            description: self.description,
            category,
            thumbnail: self.thumbnail,
            plays: self.plays,
        })
    }
}
