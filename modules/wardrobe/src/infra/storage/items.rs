use sqlx::{FromRow, SqliteExecutor};

use crate::domain::model::{ClothingItem, ClothingItemFields};

#[derive(Debug, Clone, FromRow)]
pub struct ClothingItemRow {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub color: String,
    pub style: String,
    pub season: String,
}

impl From<ClothingItemRow> for ClothingItem {
    fn from(row: ClothingItemRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            kind: row.kind,
            color: row.color,
            style: row.style,
            season: row.season,
        }
    }
}

pub async fn insert(
    db: impl SqliteExecutor<'_>,
    user_id: i64,
    fields: &ClothingItemFields,
) -> sqlx::Result<ClothingItemRow> {
    sqlx::query_as(
        "INSERT INTO clothing_items (user_id, type, color, style, season) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         RETURNING id, user_id, type, color, style, season",
    )
    .bind(user_id)
    .bind(&fields.kind)
    .bind(&fields.color)
    .bind(&fields.style)
    .bind(&fields.season)
    .fetch_one(db)
    .await
}

pub async fn list_for_user(
    db: impl SqliteExecutor<'_>,
    user_id: i64,
) -> sqlx::Result<Vec<ClothingItemRow>> {
    sqlx::query_as(
        "SELECT id, user_id, type, color, style, season FROM clothing_items WHERE user_id = ?1",
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Ownership-scoped lookup: an id that exists under a different user is
/// treated the same as a missing id.
pub async fn find_for_user(
    db: impl SqliteExecutor<'_>,
    user_id: i64,
    item_id: i64,
) -> sqlx::Result<Option<ClothingItemRow>> {
    sqlx::query_as(
        "SELECT id, user_id, type, color, style, season FROM clothing_items \
         WHERE id = ?1 AND user_id = ?2",
    )
    .bind(item_id)
    .bind(user_id)
    .fetch_optional(db)
    .await
}

/// Overwrite all four fields. Returns None when the ownership-scoped lookup
/// misses.
pub async fn update_for_user(
    db: impl SqliteExecutor<'_>,
    user_id: i64,
    item_id: i64,
    fields: &ClothingItemFields,
) -> sqlx::Result<Option<ClothingItemRow>> {
    sqlx::query_as(
        "UPDATE clothing_items SET type = ?3, color = ?4, style = ?5, season = ?6 \
         WHERE id = ?1 AND user_id = ?2 \
         RETURNING id, user_id, type, color, style, season",
    )
    .bind(item_id)
    .bind(user_id)
    .bind(&fields.kind)
    .bind(&fields.color)
    .bind(&fields.style)
    .bind(&fields.season)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: impl SqliteExecutor<'_>, item_id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM clothing_items WHERE id = ?1")
        .bind(item_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_for_owner(db: impl SqliteExecutor<'_>, user_id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM clothing_items WHERE user_id = ?1")
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn delete_all(db: impl SqliteExecutor<'_>) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM clothing_items").execute(db).await?;
    Ok(())
}
