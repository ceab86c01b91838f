use serde::{Deserialize, Serialize};

use crate::domain::model::{
    ClothingItem, ClothingItemFields, Outfit, OutfitDraft, OutfitPatch, User,
};

/// REST DTO for user representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
}

/// REST DTO for creating or updating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameReq {
    pub username: String,
}

/// REST DTO for clothing item representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItemDto {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub style: String,
    pub season: String,
}

/// REST DTO for creating or fully updating a clothing item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItemReq {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub style: String,
    pub season: String,
}

/// REST DTO for outfit representation with nested item details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitDto {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub clothing_items: Vec<ClothingItemDto>,
}

/// REST DTO for creating an outfit.
///
/// `user_id` and `name` are optional on the wire so their absence becomes a
/// typed validation error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateOutfitReq {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    #[serde(default)]
    pub clothing_item_ids: Vec<i64>,
}

/// REST DTO for updating an outfit (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateOutfitReq {
    pub name: Option<String>,
    pub clothing_item_ids: Option<Vec<i64>>,
}

// Conversion implementations between REST DTOs and domain models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

impl From<ClothingItem> for ClothingItemDto {
    fn from(item: ClothingItem) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            kind: item.kind,
            color: item.color,
            style: item.style,
            season: item.season,
        }
    }
}

impl From<ClothingItemReq> for ClothingItemFields {
    fn from(req: ClothingItemReq) -> Self {
        Self {
            kind: req.kind,
            color: req.color,
            style: req.style,
            season: req.season,
        }
    }
}

impl From<Outfit> for OutfitDto {
    fn from(outfit: Outfit) -> Self {
        Self {
            id: outfit.id,
            user_id: outfit.user_id,
            name: outfit.name,
            clothing_items: outfit
                .clothing_items
                .into_iter()
                .map(ClothingItemDto::from)
                .collect(),
        }
    }
}

impl From<CreateOutfitReq> for OutfitDraft {
    fn from(req: CreateOutfitReq) -> Self {
        Self {
            user_id: req.user_id,
            name: req.name,
            clothing_item_ids: req.clothing_item_ids,
        }
    }
}

impl From<UpdateOutfitReq> for OutfitPatch {
    fn from(req: UpdateOutfitReq) -> Self {
        Self {
            name: req.name,
            clothing_item_ids: req.clothing_item_ids,
        }
    }
}
