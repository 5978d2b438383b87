use serde::{Deserialize, Serialize};

use crate::validation::{check_length, check_url, Validate, ValidationError};

/// A user as stored in the `user` collection. `username` is only unique by
/// convention: creation looks it up before inserting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Validate for CreateUserRequest {
    type Output = User;

    fn validate(self) -> Result<User, ValidationError> {
        check_length("username", &self.username, 2, 30)?;
        if let Some(avatar_url) = &self.avatar_url {
            check_url("avatar_url", avatar_url)?;
        }

        Ok(User {
            username: self.username,
            avatar_url: self.avatar_url,
        })
    }
}
