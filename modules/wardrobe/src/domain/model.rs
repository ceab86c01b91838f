//! Pure domain models (no serde; REST DTOs live in `api::rest::dto`).

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// A clothing item owned by a user.
///
/// `kind` is the item's "type" on the wire; the wire name is a Rust keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothingItem {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub color: String,
    pub style: String,
    pub season: String,
}

/// A named outfit with its attached items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outfit {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub clothing_items: Vec<ClothingItem>,
}

/// Field set for creating or fully updating a clothing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothingItemFields {
    pub kind: String,
    pub color: String,
    pub style: String,
    pub season: String,
}

/// Unvalidated outfit creation data.
///
/// `user_id` and `name` stay optional here; the service turns their absence
/// into a typed validation error before touching the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutfitDraft {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub clothing_item_ids: Vec<i64>,
}

/// Partial update data for an outfit.
///
/// A provided name replaces the stored one verbatim. A provided, non-empty
/// id list fully replaces the item set; an omitted or empty list leaves the
/// existing associations untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutfitPatch {
    pub name: Option<String>,
    pub clothing_item_ids: Option<Vec<i64>>,
}
