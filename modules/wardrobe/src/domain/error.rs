use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: i64 },

    #[error("Clothing item {item_id} not found for user {user_id}")]
    ClothingItemNotFound { user_id: i64, item_id: i64 },

    #[error("Outfit not found: {id}")]
    OutfitNotFound { id: i64 },

    #[error("Username '{username}' is already taken")]
    UsernameTaken { username: String },

    #[error("Outfit name '{name}' is already taken for user {user_id}")]
    OutfitNameTaken { user_id: i64, name: String },

    #[error("Outfit user id and name are required")]
    MissingOutfitFields,

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn user_not_found(id: i64) -> Self {
        Self::UserNotFound { id }
    }

    pub fn clothing_item_not_found(user_id: i64, item_id: i64) -> Self {
        Self::ClothingItemNotFound { user_id, item_id }
    }

    pub fn outfit_not_found(id: i64) -> Self {
        Self::OutfitNotFound { id }
    }

    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }

    pub fn outfit_name_taken(user_id: i64, name: impl Into<String>) -> Self {
        Self::OutfitNameTaken {
            user_id,
            name: name.into(),
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database {
            message: e.to_string(),
        }
    }
}
